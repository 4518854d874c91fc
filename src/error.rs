//! Error taxonomy for resolving and downloading PaperMC builds.
//!
//! Resolution errors ([`DownloadError::is_recoverable`]) describe bad or stale
//! user input and could be retried with a different selector. The rest come
//! from the network or the local filesystem and always end the invocation.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = DownloadError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DownloadError {
    /// Connection or I/O failure while talking to the remote host.
    #[error("An error occurred while sending the request to {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-200 response, or a body that does not have the expected shape.
    #[error("{message}")]
    RemoteApi {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Local delete, create, write or rename failure.
    #[error("{message}: {}", path.display())]
    FileSystem {
        message: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The API returned nothing to choose from.
    #[error("No {what} available from the PaperMC API")]
    CatalogEmpty { what: &'static str },

    #[error("Unknown Minecraft server version '{0}'")]
    UnknownVersion(String),

    #[error("Unknown build {build} for Minecraft server version '{version}'")]
    UnknownBuild { version: String, build: u32 },

    #[error("Invalid Minecraft server build number '{value}'")]
    InvalidBuildNumber {
        value: String,
        #[source]
        source: Option<ParseIntError>,
    },
}

impl DownloadError {
    pub(crate) fn status(url: &str, status: reqwest::StatusCode) -> Self {
        Self::RemoteApi {
            message: format!("Non-Ok response received from {}: {}", url, status),
            source: None,
        }
    }

    pub(crate) fn malformed(url: &str, source: serde_json::Error) -> Self {
        Self::RemoteApi {
            message: format!("Unable to parse the response from {}", url),
            source: Some(source),
        }
    }

    pub(crate) fn invalid_entry(message: impl Into<String>) -> Self {
        Self::RemoteApi {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn fs(message: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            message,
            path: path.into(),
            source,
        }
    }

    /// Whether a different selector could make the same invocation succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::CatalogEmpty { .. }
                | Self::UnknownVersion(_)
                | Self::UnknownBuild { .. }
                | Self::InvalidBuildNumber { .. }
        )
    }
}
