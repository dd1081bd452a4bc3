//! Failure taxonomy for calls against the remote API.

/// Errors surfaced by the HTTP transport and the auth client.
///
/// Client-side validation failures never reach this enum; they stop in
/// `util::validate` before a request is built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server could not be reached at all.
    #[error("network error: {0}")]
    Network(String),
    /// The fixed per-request deadline elapsed before a response arrived.
    #[error("request timed out")]
    Timeout,
    /// The server answered with a non-2xx status. `message` carries the
    /// server-provided explanation when the body had one.
    #[error("server returned status {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },
    /// A 2xx response body that could not be parsed.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// A login attempt was issued while a previous one is still pending.
    #[error("a sign-in attempt is already in progress")]
    Busy,
}

impl ApiError {
    /// HTTP status code, for [`ApiError::Http`] only.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message, for [`ApiError::Http`] only.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
