//! Text summary builder for CLI output.
//!
//! Formats the current page of each table as human-readable lines for text mode.

use crate::model::AggregationStatus;
use crate::view::{ResultsState, Table};

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary for the visible page of both tables.
pub(crate) fn build_text_summary(results: &ResultsState) -> TextSummary {
    let mut lines = Vec::new();
    let result = &results.result;

    if let Some(username) = result.username.as_deref() {
        lines.push(format!("User: {username}"));
    }

    if result.status == AggregationStatus::Failed {
        if let Some(msg) = result.message.as_deref() {
            lines.push(msg.to_string());
        }
        return TextSummary { lines };
    }

    let repo_label = results
        .page(Table::Repositories)
        .range_label(results.total(Table::Repositories));
    lines.push(String::new());
    lines.push(format!("Repositories ({repo_label})"));
    let rows = results.repo_rows();
    let width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    lines.push(format!("  {:<width$}  Description", "Name"));
    for repo in rows {
        lines.push(format!(
            "  {:<width$}  {}",
            repo.name,
            repo.description_or_placeholder()
        ));
    }

    let org_label = results
        .page(Table::Organizations)
        .range_label(results.total(Table::Organizations));
    lines.push(String::new());
    lines.push(format!("Organizations ({org_label})"));
    if let Some(msg) = result.message.as_deref() {
        lines.push(format!("  {msg}"));
    }
    for org in results.org_rows() {
        lines.push(format!("  {}", org.login));
    }

    TextSummary { lines }
}

#[cfg(test)]
#[path = "tests/text_summary_tests.rs"]
mod tests;
