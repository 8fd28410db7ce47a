use reqwest::StatusCode;

/// Transport-channel failure for an API call. Application-level failures
/// never end up here: those arrive as a resolved envelope whose `code`
/// says so, and callers check that separately.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network failure, timeout, or a response body that is not the
    /// expected envelope shape.
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("backend error: {status}, details: {body}")]
    Status { status: StatusCode, body: String },
}
