//! Wind Data Source
//!
//! The single fetch operation the dashboard depends on. Callers own retry
//! policy; a source only reports success or failure.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{Client, Url};
use snafu::{ResultExt, ensure};

use crate::domain::WindData;
use crate::error::{DecodeSnafu, Error, RequestSnafu, Result, StatusSnafu};

/// Anything that can produce a wind snapshot for a number of minutes of history
pub trait WindSource: Send + Sync + 'static {
    /// Fetch `minutes` of history
    fn fetch(&self, minutes: u32) -> BoxFuture<'static, Result<WindData>>;

    /// Name used in logs
    fn name(&self) -> &str;
}

/// HTTP JSON wind source: `GET {endpoint}?timespan={minutes}`
#[derive(Clone, Debug)]
pub struct HttpWindSource {
    client: Client,
    endpoint: Url,
}

impl HttpWindSource {
    /// Create a source for `endpoint` with a per-request timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| Error::Invalid {
            message: format!("invalid endpoint {endpoint:?}: {e}"),
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context(RequestSnafu {
                url: endpoint.to_string(),
            })?;
        Ok(Self { client, endpoint })
    }

    /// Request URL for a span
    pub fn url_for(&self, minutes: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("timespan", &minutes.to_string());
        url
    }

    /// Convert into a shared trait object
    pub fn shared(self) -> Arc<dyn WindSource> {
        Arc::new(self)
    }
}

impl WindSource for HttpWindSource {
    fn fetch(&self, minutes: u32) -> BoxFuture<'static, Result<WindData>> {
        let client = self.client.clone();
        let url = self.url_for(minutes);

        Box::pin(async move {
            tracing::debug!(url = %url, "Fetching wind data");
            let response = client
                .get(url.clone())
                .send()
                .await
                .context(RequestSnafu {
                    url: url.to_string(),
                })?;

            let status = response.status();
            ensure!(
                status.is_success(),
                StatusSnafu {
                    status: status.as_u16()
                }
            );

            response.json::<WindData>().await.context(DecodeSnafu)
        })
    }

    fn name(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_timespan_to_existing_query() {
        let source = HttpWindSource::new(
            "https://example.org/api/wind?station=enop",
            Duration::from_secs(1),
        )
        .expect("source");
        assert_eq!(
            source.url_for(60).as_str(),
            "https://example.org/api/wind?station=enop&timespan=60"
        );
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let err = HttpWindSource::new("not a url", Duration::from_secs(1)).expect_err("invalid");
        assert!(matches!(err, Error::Invalid { .. }));
        assert!(!err.is_fetch());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_fetch_error() {
        // Port 9 (discard) on loopback is not expected to serve HTTP.
        let source = HttpWindSource::new("http://127.0.0.1:9/wind", Duration::from_millis(500))
            .expect("source");
        let err = source.fetch(10).await.expect_err("unreachable");
        assert!(err.is_fetch());
    }
}
