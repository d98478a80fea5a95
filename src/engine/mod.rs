//! Directory service boundary.
//!
//! Everything that talks to the remote user directory goes through
//! [`DirectoryService`], so controllers can be driven by the real HTTP client
//! or by an in-memory fake.

mod directory;

pub use directory::DirectoryClient;

use crate::error::ServiceError;
use crate::model::{OrganizationItem, RepositoryItem};
use async_trait::async_trait;

#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Succeeds iff the directory reports the user as existing (2xx).
    async fn check_user(&self, username: &str) -> Result<(), ServiceError>;

    /// Public repositories in the order the service returned them.
    async fn fetch_repositories(&self, username: &str)
        -> Result<Vec<RepositoryItem>, ServiceError>;

    /// Public organizations in the order the service returned them.
    async fn fetch_organizations(
        &self,
        username: &str,
    ) -> Result<Vec<OrganizationItem>, ServiceError>;
}

#[cfg(test)]
#[path = "tests/directory_tests.rs"]
mod tests;
