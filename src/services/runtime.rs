//! Tokio Runtime Bridge
//!
//! GPUI uses its own executor, but reqwest requires tokio.
//! This module runs tokio futures from GPUI context.
//!
//! ## Pattern
//!
//! ```text
//! GPUI async task
//!       │
//!       ▼
//! run_in_tokio(source.fetch(minutes))
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! Result returned to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::{Builder, Runtime};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
#[allow(clippy::expect_used)]
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("vind-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future in the tokio runtime and await its result from any executor
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_tokio_from_foreign_executor() {
        let value = futures::executor::block_on(run_in_tokio(async {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            41 + 1
        }));
        assert_eq!(value, 42);
    }
}
