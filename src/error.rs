//! Error type shared by the data source, configuration and binary.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong outside the pure table logic.
///
/// Table transitions never fail; an unknown record id is a silent no-op. The
/// variants here come from loading users, loading configuration, or setting up
/// logging.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or the body could not be read.
    #[error("failed to fetch users from {url}: {source}")]
    Fetch {
        /// The endpoint that was requested.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("{url} responded with {status}")]
    FetchStatus {
        /// The endpoint that was requested.
        url: String,
        /// The status it answered with.
        status: reqwest::StatusCode,
    },

    /// The body was not a JSON array of users.
    #[error("malformed user list: {source}")]
    Parse {
        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file or environment could not be read.
    #[error("invalid configuration: {source}")]
    Config {
        /// The configuration error.
        #[source]
        source: config::ConfigError,
    },

    /// The log file could not be opened.
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        /// The file that was opened.
        path: PathBuf,
        /// The I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for failures of the user fetch itself (transport or status), as
    /// opposed to a bad response body.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::FetchStatus { .. })
    }

    /// True when the response body could not be parsed.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

impl From<config::ConfigError> for Error {
    fn from(source: config::ConfigError) -> Self {
        Error::Config { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Parse { source }
    }
}
