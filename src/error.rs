//! Error types for Vind-GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// The wind data source could not be reached
    #[snafu(display("Request to {url} failed: {source}"))]
    Request { url: String, source: reqwest::Error },

    /// The wind data source answered with a non-success status
    #[snafu(display("Wind data source returned HTTP {status}"))]
    Status { status: u16 },

    /// The wind data payload could not be decoded
    #[snafu(display("Failed to decode wind data: {source}"))]
    Decode { source: reqwest::Error },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// Whether this error came from retrieving wind data
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Error::Request { .. } | Error::Status { .. } | Error::Decode { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_retrieval_failures_are_fetch_errors() {
        assert!(Error::Status { status: 503 }.is_fetch());
        assert!(!Error::Invalid { message: "bad endpoint".into() }.is_fetch());

        let io: Error = std::io::Error::other("disk full").into();
        assert!(!io.is_fetch());

        let toml: Error = toml::from_str::<toml::Table>("= 1").unwrap_err().into();
        assert!(matches!(toml, Error::TomlDe { .. }));
        assert!(!toml.is_fetch());
    }
}
