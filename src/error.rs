use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Status reported for failures that never produced an HTTP response.
pub const NO_STATUS: i32 = -1;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("unable to reach platform: {source}")]
    Transport {
        curl: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("status {status}: {}", String::from_utf8_lossy(.body))]
    Status {
        status: StatusCode,
        body: Vec<u8>,
        curl: String,
    },
    #[error("failed to decode response: {source}")]
    Decode {
        body: Vec<u8>,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("file error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not found: {0}")]
    NotFound(String),
}

impl ClientError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status associated with the failure, or [`NO_STATUS`] when no
    /// response was received.
    pub fn status(&self) -> i32 {
        match self {
            Self::Status { status, .. } => i32::from(status.as_u16()),
            _ => NO_STATUS,
        }
    }

    /// Curl equivalent of the request that failed, when one was built.
    pub fn curl(&self) -> Option<&str> {
        match self {
            Self::Transport { curl, .. } | Self::Status { curl, .. } => Some(curl),
            _ => None,
        }
    }

    /// Raw response bytes kept for diagnostics.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}
