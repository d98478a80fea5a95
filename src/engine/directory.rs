use crate::engine::DirectoryService;
use crate::error::ServiceError;
use crate::model::{LookupConfig, OrganizationItem, RepositoryItem};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use url::Url;

/// Result of decoding a collection body. Field presence is never trusted:
/// anything that does not match the expected shape is `Malformed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Parsed(T),
    Malformed(String),
}

impl<T> ParseOutcome<T> {
    pub fn into_result(self) -> Result<T, ServiceError> {
        match self {
            ParseOutcome::Parsed(v) => Ok(v),
            ParseOutcome::Malformed(reason) => Err(ServiceError::Malformed(reason)),
        }
    }
}

fn parse_array<T: DeserializeOwned>(body: &[u8]) -> ParseOutcome<Vec<T>> {
    match serde_json::from_slice::<Vec<T>>(body) {
        Ok(items) => ParseOutcome::Parsed(items),
        Err(e) => ParseOutcome::Malformed(e.to_string()),
    }
}

pub fn parse_repositories(body: &[u8]) -> ParseOutcome<Vec<RepositoryItem>> {
    parse_array(body)
}

pub fn parse_organizations(body: &[u8]) -> ParseOutcome<Vec<OrganizationItem>> {
    parse_array(body)
}

/// HTTP client for the GitHub-style `/users/{username}` endpoints.
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DirectoryClient {
    pub fn new(cfg: &LookupConfig) -> Result<Self> {
        let base_url = Url::parse(&cfg.base_url)
            .with_context(|| format!("invalid base URL: {}", cfg.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("base URL cannot carry a path: {}", cfg.base_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let http = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .default_headers(headers)
            .build()
            .context("build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// `{base}/users/{username}[/{collection}]`, with the username encoded as one path segment.
    pub fn user_url(&self, username: &str, collection: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`, so the segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(username);
            if let Some(c) = collection {
                segments.push(c);
            }
        }
        url
    }

    async fn get_body(&self, url: Url) -> Result<Vec<u8>, ServiceError> {
        tracing::debug!(%url, "directory request");
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl DirectoryService for DirectoryClient {
    async fn check_user(&self, username: &str) -> Result<(), ServiceError> {
        let url = self.user_url(username, None);
        tracing::debug!(%url, "existence check");
        // Only the status matters; the profile body is not consumed.
        self.http.get(url).send().await?.error_for_status()?;
        Ok(())
    }

    async fn fetch_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositoryItem>, ServiceError> {
        let body = self.get_body(self.user_url(username, Some("repos"))).await?;
        parse_repositories(&body).into_result()
    }

    async fn fetch_organizations(
        &self,
        username: &str,
    ) -> Result<Vec<OrganizationItem>, ServiceError> {
        let body = self.get_body(self.user_url(username, Some("orgs"))).await?;
        parse_organizations(&body).into_result()
    }
}
