//! Fixtures shared by unit tests: an in-memory directory and sample rows.

use crate::engine::DirectoryService;
use crate::error::ServiceError;
use crate::model::{OrganizationItem, RepositoryItem};
use crate::view::HomeState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn repos(n: usize) -> Vec<RepositoryItem> {
    (1..=n)
        .map(|i| RepositoryItem {
            id: i as u64,
            name: format!("repo-{i}"),
            description: (i % 2 == 0).then(|| format!("description {i}")),
        })
        .collect()
}

pub fn orgs(n: usize) -> Vec<OrganizationItem> {
    (1..=n)
        .map(|i| OrganizationItem {
            id: 100 + i as u64,
            login: format!("org-{i}"),
        })
        .collect()
}

/// Home screen with `input` already typed and no lookup outstanding.
pub fn home_with(input: &str) -> HomeState {
    HomeState {
        input: input.to_string(),
        loading: false,
    }
}

struct UserFixture {
    repos: Result<Vec<RepositoryItem>, ServiceError>,
    orgs: Result<Vec<OrganizationItem>, ServiceError>,
    repos_delay: Duration,
    orgs_delay: Duration,
}

/// Directory backed by fixtures. Unknown users answer 404.
#[derive(Default)]
pub struct FakeDirectory {
    users: HashMap<String, UserFixture>,
    check_calls: AtomicUsize,
    repo_calls: AtomicUsize,
    org_calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(
        mut self,
        username: &str,
        repos: Result<Vec<RepositoryItem>, ServiceError>,
        orgs: Result<Vec<OrganizationItem>, ServiceError>,
    ) -> Self {
        self.users.insert(
            username.to_string(),
            UserFixture {
                repos,
                orgs,
                repos_delay: Duration::ZERO,
                orgs_delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn with_delays(mut self, username: &str, repos: Duration, orgs: Duration) -> Self {
        if let Some(u) = self.users.get_mut(username) {
            u.repos_delay = repos;
            u.orgs_delay = orgs;
        }
        self
    }

    pub fn check_calls(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }

    pub fn repo_calls(&self) -> usize {
        self.repo_calls.load(Ordering::SeqCst)
    }

    pub fn org_calls(&self) -> usize {
        self.org_calls.load(Ordering::SeqCst)
    }

    fn user(&self, username: &str) -> Result<&UserFixture, ServiceError> {
        self.users.get(username).ok_or(ServiceError::Status(404))
    }
}

#[async_trait]
impl DirectoryService for FakeDirectory {
    async fn check_user(&self, username: &str) -> Result<(), ServiceError> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        self.user(username).map(|_| ())
    }

    async fn fetch_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositoryItem>, ServiceError> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        let user = self.user(username)?;
        tokio::time::sleep(user.repos_delay).await;
        user.repos.clone()
    }

    async fn fetch_organizations(
        &self,
        username: &str,
    ) -> Result<Vec<OrganizationItem>, ServiceError> {
        self.org_calls.fetch_add(1, Ordering::SeqCst);
        let user = self.user(username)?;
        tokio::time::sleep(user.orgs_delay).await;
        user.orgs.clone()
    }
}
