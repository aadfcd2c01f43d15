use thiserror::Error;

/// Coarse classification of a transport failure, carried alongside the
/// underlying reqwest error. TLS handshake failures are not distinguished by
/// reqwest and surface as `Connect` or `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCategory {
    Timeout,
    Connect,
    /// Non-success HTTP status.
    Status(u16),
    Other,
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("transport failure ({category:?}): {source}")]
    Transport {
        category: TransportCategory,
        #[source]
        source: reqwest::Error,
    },

    #[error("document could not be parsed: {message}")]
    Parse { message: String },

    #[error("invalid value for `{field}`: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ScrapeError::Transport { .. })
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(source: reqwest::Error) -> Self {
        let category = if source.is_timeout() {
            TransportCategory::Timeout
        } else if source.is_connect() {
            TransportCategory::Connect
        } else if let Some(status) = source.status() {
            TransportCategory::Status(status.as_u16())
        } else {
            TransportCategory::Other
        };
        ScrapeError::Transport { category, source }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
