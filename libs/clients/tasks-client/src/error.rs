use reqwest::StatusCode;
use thiserror::Error;

/// Everything a [`TasksClient`](crate::TasksClient) call can fail with.
///
/// `Invalid` and `Rejected` both mean "fix the input"; `Network` means the
/// server was never reached and the call may be retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed local validation, nothing was sent
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// The server refused the input (4xx other than 404)
    #[error("Rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Build the error for a non-success status and its `{ "error" }` message
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            s if s.is_client_error() => ClientError::Rejected {
                status: s.as_u16(),
                message,
            },
            s => ClientError::Server {
                status: s.as_u16(),
                message,
            },
        }
    }

    /// Input was refused, locally or by the server
    pub fn is_rejected(&self) -> bool {
        matches!(self, ClientError::Invalid(_) | ClientError::Rejected { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }

    /// The request never got an answer
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}
