//! Username existence check ahead of navigation.

use crate::engine::DirectoryService;
use crate::error::LookupError;
use crate::model::{Notification, MSG_LOOKUP_OK};
use crate::view::Route;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The user exists; carries the identifier exactly as entered.
    Success(String),
    Failure(LookupError),
}

impl LookupOutcome {
    /// Toast to show for this outcome.
    pub fn notification(&self) -> Notification {
        match self {
            LookupOutcome::Success(_) => Notification::success(MSG_LOOKUP_OK),
            LookupOutcome::Failure(e) => Notification::error(e.to_string()),
        }
    }

    /// Results location to navigate to, only on success.
    pub fn location(&self) -> Option<String> {
        match self {
            LookupOutcome::Success(username) => Some(Route::results_location(username)),
            LookupOutcome::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<String, LookupError> {
        match self {
            LookupOutcome::Success(username) => Ok(username),
            LookupOutcome::Failure(e) => Err(e),
        }
    }
}

pub struct LookupController<S: ?Sized> {
    service: Arc<S>,
}

impl<S: DirectoryService + ?Sized> LookupController<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Validate `identifier` and issue exactly one existence check for it.
    ///
    /// Blank input fails with [`LookupError::Validation`] without touching the network.
    /// Every service failure collapses into [`LookupError::NotFoundOrService`].
    pub async fn attempt_lookup(&self, identifier: &str) -> LookupOutcome {
        if identifier.trim().is_empty() {
            tracing::debug!("lookup rejected: blank username");
            return LookupOutcome::Failure(LookupError::Validation);
        }

        match self.service.check_user(identifier).await {
            Ok(()) => {
                tracing::info!(username = %identifier, "user found");
                LookupOutcome::Success(identifier.to_string())
            }
            Err(e) => {
                tracing::warn!(username = %identifier, error = %e, "lookup failed");
                LookupOutcome::Failure(LookupError::NotFoundOrService)
            }
        }
    }
}
