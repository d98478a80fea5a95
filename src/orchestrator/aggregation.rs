//! Concurrent repository/organization fetch and all-or-nothing merge.

use crate::engine::DirectoryService;
use crate::error::{ServiceError, MSG_AGGREGATION_FAILED, MSG_NO_ORGANIZATIONS};
use crate::model::{AggregationResult, AggregationStatus, OrganizationItem, RepositoryItem};
use std::sync::Arc;

/// Combine both fetch outcomes into one result.
///
/// Ready only when both sides succeeded; otherwise Failed with both collections empty.
/// An empty organization list is annotated, not treated as a failure.
pub fn merge_aggregation(
    username: &str,
    repositories: Result<Vec<RepositoryItem>, ServiceError>,
    organizations: Result<Vec<OrganizationItem>, ServiceError>,
) -> AggregationResult {
    match (repositories, organizations) {
        (Ok(repositories), Ok(organizations)) => {
            let message = organizations
                .is_empty()
                .then(|| MSG_NO_ORGANIZATIONS.to_string());
            AggregationResult {
                username: Some(username.to_string()),
                status: AggregationStatus::Ready,
                repositories,
                organizations,
                message,
            }
        }
        (repos, orgs) => {
            if let Err(e) = &repos {
                tracing::warn!(username = %username, error = %e, "repositories fetch failed");
            }
            if let Err(e) = &orgs {
                tracing::warn!(username = %username, error = %e, "organizations fetch failed");
            }
            failed(username)
        }
    }
}

pub(crate) fn failed(username: &str) -> AggregationResult {
    AggregationResult {
        username: Some(username.to_string()),
        status: AggregationStatus::Failed,
        repositories: Vec::new(),
        organizations: Vec::new(),
        message: Some(MSG_AGGREGATION_FAILED.to_string()),
    }
}

pub struct AggregationController<S: ?Sized> {
    service: Arc<S>,
}

impl<S: DirectoryService + ?Sized> AggregationController<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Fetch both collections for `identifier` and wait for both to finish.
    ///
    /// A missing identifier performs no request and yields the idle state.
    pub async fn load_aggregation(&self, identifier: Option<&str>) -> AggregationResult {
        let Some(username) = identifier.filter(|u| !u.is_empty()) else {
            return AggregationResult::idle();
        };

        tracing::debug!(username = %username, "loading repositories and organizations");
        let (repositories, organizations) = tokio::join!(
            self.service.fetch_repositories(username),
            self.service.fetch_organizations(username),
        );

        let result = merge_aggregation(username, repositories, organizations);
        tracing::info!(
            username = %username,
            status = ?result.status,
            repositories = result.repositories.len(),
            organizations = result.organizations.len(),
            "aggregation finished"
        );
        result
    }
}
