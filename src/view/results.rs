use crate::model::{AggregationResult, AggregationStatus, OrganizationItem, RepositoryItem};
use crate::orchestrator::{RequestToken, RequestTracker};
use crate::view::pagination::{PageSize, PaginationState};
use crate::view::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Table {
    #[default]
    Repositories,
    Organizations,
}

impl Table {
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn toggle(self) -> Self {
        match self {
            Table::Repositories => Table::Organizations,
            Table::Organizations => Table::Repositories,
        }
    }
}

/// Results screen: the current aggregation plus one pagination state per table.
#[derive(Debug)]
pub struct ResultsState {
    pub result: AggregationResult,
    pub repo_page: PaginationState,
    pub org_page: PaginationState,
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub focus: Table,
    default_page_size: PageSize,
    tracker: RequestTracker,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl ResultsState {
    pub fn new(default_page_size: PageSize) -> Self {
        Self {
            result: AggregationResult::idle(),
            repo_page: PaginationState::new(default_page_size),
            org_page: PaginationState::new(default_page_size),
            focus: Table::Repositories,
            default_page_size,
            tracker: RequestTracker::default(),
        }
    }

    /// Enter the results view for `route`.
    ///
    /// With a username this switches to Loading and returns the token the load
    /// must be tagged with. Without one the view stays idle and nothing is requested.
    pub fn navigate(&mut self, route: &Route) -> Option<(RequestToken, String)> {
        self.reset_pages();
        match route {
            Route::Results {
                username: Some(username),
            } => {
                let token = self.tracker.issue();
                self.result = AggregationResult::loading(username);
                Some((token, username.clone()))
            }
            _ => {
                self.tracker.clear();
                self.result = AggregationResult::idle();
                None
            }
        }
    }

    /// Apply a finished load. Results for anything but the latest request are dropped.
    pub fn apply(&mut self, token: RequestToken, result: AggregationResult) -> bool {
        if !self.tracker.is_current(token) {
            tracing::debug!(token = %token, "dropping stale aggregation result");
            return false;
        }
        self.result = result;
        self.reset_pages();
        true
    }

    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn pending(&self) -> Option<RequestToken> {
        match self.result.status {
            AggregationStatus::Loading => self.tracker.latest(),
            _ => None,
        }
    }

    pub fn status(&self) -> AggregationStatus {
        self.result.status
    }

    pub fn repo_rows(&self) -> &[RepositoryItem] {
        self.repo_page.slice(&self.result.repositories)
    }

    pub fn org_rows(&self) -> &[OrganizationItem] {
        self.org_page.slice(&self.result.organizations)
    }

    pub fn total(&self, table: Table) -> usize {
        match table {
            Table::Repositories => self.result.repositories.len(),
            Table::Organizations => self.result.organizations.len(),
        }
    }

    pub fn page(&self, table: Table) -> PaginationState {
        match table {
            Table::Repositories => self.repo_page,
            Table::Organizations => self.org_page,
        }
    }

    /// Replace one table's pagination; the other table is untouched.
    pub fn update_page(
        &mut self,
        table: Table,
        f: impl FnOnce(PaginationState, usize) -> PaginationState,
    ) {
        let total = self.total(table);
        match table {
            Table::Repositories => self.repo_page = f(self.repo_page, total),
            Table::Organizations => self.org_page = f(self.org_page, total),
        }
    }

    fn reset_pages(&mut self) {
        self.repo_page = PaginationState::new(self.default_page_size);
        self.org_page = PaginationState::new(self.default_page_size);
    }
}

#[cfg(test)]
#[path = "tests/results_tests.rs"]
mod tests;
