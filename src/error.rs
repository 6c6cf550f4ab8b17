use actix_web::http::StatusCode;
use thiserror::Error;

/// Why a single upstream participants call failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamCause {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("unparseable body: {0}")]
    Body(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("{field} param is required")]
    MissingParameter { field: &'static str },
    #[error("invalid {field} param: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
    #[error("malformed participant #{position} from tournament {tournament_id}: missing {field}")]
    MalformedRecord {
        tournament_id: String,
        field: &'static str,
        position: usize,
    },
    #[error("fetch for tournament {tournament_id} failed: {cause}")]
    UpstreamFailure {
        tournament_id: String,
        cause: UpstreamCause,
    },
    #[error("upstream did not answer within {after_secs}s")]
    Timeout { after_secs: u64 },
    #[error("http client error: {0}")]
    Client(String),
}

impl ProxyError {
    #[must_use]
    pub fn missing(field: &'static str) -> Self {
        Self::MissingParameter { field }
    }

    pub fn upstream(tournament_id: impl Into<String>, cause: UpstreamCause) -> Self {
        Self::UpstreamFailure {
            tournament_id: tournament_id.into(),
            cause,
        }
    }

    /// Status code used when this error reaches the HTTP boundary.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter { .. } | Self::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::MalformedRecord { .. } | Self::UpstreamFailure { .. } => StatusCode::BAD_GATEWAY,
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for UpstreamCause {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for UpstreamCause {
    fn from(err: serde_json::Error) -> Self {
        Self::Body(err.to_string())
    }
}
