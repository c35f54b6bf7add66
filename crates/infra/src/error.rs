use thiserror::Error;

/// Failure reaching, or making sense of, an upstream API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The configured base URL cannot carry the request path.
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream transport error: {0}")]
    Transport(String),

    #[error("upstream responded with status {status}")]
    Status { status: u16 },

    /// The upstream answered 200 but reported a failure in its body.
    #[error("upstream rejected the request: {0}")]
    Rejected(String),

    /// The body did not match the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Schema(String),
}

impl UpstreamError {
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Short, stable code that is safe to show to API clients.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "upstream_timeout",
            Self::InvalidUrl(_) | Self::Transport(_) => "upstream_unavailable",
            Self::Status { .. } => "upstream_status",
            Self::Rejected(_) => "upstream_rejected",
            Self::Schema(_) => "upstream_schema",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::Status { status: status.as_u16() }
        } else if e.is_decode() {
            Self::Schema(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
