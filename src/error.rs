use thiserror::Error;

pub const MSG_VALIDATION: &str = "Please enter a GitHub username!";
pub const MSG_NOT_FOUND: &str = "No results found for this username!";
pub const MSG_NO_ORGANIZATIONS: &str = "No public organizations found for this user.";
pub const MSG_AGGREGATION_FAILED: &str = "An error occurred while fetching data.";

/// Failure detail from the directory service boundary.
///
/// Only ever logged; callers collapse it into [`LookupError`] or [`AggregationError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("directory service returned HTTP {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) => ServiceError::Status(status.as_u16()),
            None => ServiceError::Transport(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{}", MSG_VALIDATION)]
    Validation,
    #[error("{}", MSG_NOT_FOUND)]
    NotFoundOrService,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("{}", MSG_AGGREGATION_FAILED)]
    Failed,
}
