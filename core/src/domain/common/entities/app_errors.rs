use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Please enter your request.")]
    EmptyRequest,

    #[error("No content received.")]
    EmptyResponse,

    #[error("Upstream completion service failed: {0}")]
    UpstreamFailure(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Internal server error")]
    InternalServerError,
}
