use serde::{Deserialize, Serialize};

/// Placeholder rendered for repositories without a description.
pub const NO_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    pub base_url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryItem {
    pub id: u64,
    pub name: String,
    // null and missing both land here as None
    #[serde(default)]
    pub description: Option<String>,
}

impl RepositoryItem {
    /// Description text for display, falling back to the fixed placeholder.
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationItem {
    pub id: u64,
    pub login: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationStatus {
    /// No username was supplied; nothing has been requested.
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub username: Option<String>,
    pub status: AggregationStatus,
    pub repositories: Vec<RepositoryItem>,
    pub organizations: Vec<OrganizationItem>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AggregationResult {
    pub fn idle() -> Self {
        Self {
            username: None,
            status: AggregationStatus::Idle,
            repositories: Vec::new(),
            organizations: Vec::new(),
            message: None,
        }
    }

    pub fn loading(username: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            status: AggregationStatus::Loading,
            ..Self::idle()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Shown after the existence check finds the user.
pub const MSG_LOOKUP_OK: &str = "Search successful!";

/// Transient message for the presentation layer (toast-style).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Events emitted by the controller loop and consumed by the TUI.
#[derive(Debug, Clone)]
#[cfg_attr(not(feature = "tui"), allow(dead_code))]
pub enum AppEvent {
    LookupFinished {
        // Where to go next; None keeps the user on the home screen.
        location: Option<String>,
        notification: Notification,
    },
    AggregationCompleted {
        token: crate::orchestrator::RequestToken,
        // Box to keep AppEvent small; results can carry hundreds of rows.
        result: Box<AggregationResult>,
    },
}
