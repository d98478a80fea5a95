use crate::engine::{DirectoryClient, DirectoryService};
use crate::error::AggregationError;
use crate::model::{AggregationStatus, LookupConfig, Notification, NotificationKind};
use crate::orchestrator::{AggregationController, LookupController};
use crate::view::{PageSize, ResultsState, Route, Table};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Output line routing for stdout/stderr writer.
enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Spawn a blocking writer for stdout/stderr to avoid blocking async tasks.
fn spawn_output_writer() -> (
    mpsc::UnboundedSender<OutputLine>,
    tokio::task::JoinHandle<()>,
) {
    let (tx, mut rx) = mpsc::unbounded_channel::<OutputLine>();
    let handle = tokio::task::spawn_blocking(move || {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let mut out = std::io::LineWriter::new(stdout.lock());
        let mut err = std::io::LineWriter::new(stderr.lock());

        while let Some(line) = rx.blocking_recv() {
            match line {
                OutputLine::Stdout(msg) => {
                    let _ = writeln!(out, "{}", msg);
                }
                OutputLine::Stderr(msg) => {
                    let _ = writeln!(err, "{}", msg);
                }
            }
        }

        let _ = out.flush();
        let _ = err.flush();
    });
    (tx, handle)
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "github-user-lookup",
    version,
    about = "Look up a GitHub user and list their public repositories and organizations"
)]
pub struct Cli {
    /// Username to look up (pre-fills the search box in the TUI)
    pub username: Option<String>,

    /// Base URL of the directory API
    #[arg(long, default_value = "https://api.github.com")]
    pub base_url: String,

    /// Print the aggregated result as JSON and exit (no TUI)
    #[arg(long)]
    pub json: bool,

    /// Print both tables as text and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Rows per page for both tables (5, 10 or 25)
    #[arg(long, default_value_t = PageSize::Five)]
    pub page_size: PageSize,

    /// Zero-based repositories page to print in text mode
    #[arg(long, default_value_t = 0)]
    pub repo_page: usize,

    /// Zero-based organizations page to print in text mode
    #[arg(long, default_value_t = 0)]
    pub org_page: usize,

    /// Override the User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl Cli {
    pub fn is_tui(&self) -> bool {
        cfg!(feature = "tui") && !self.json && !self.text
    }
}

pub async fn run(args: Cli) -> Result<()> {
    if args.json && args.text {
        return Err(anyhow::anyhow!("--json and --text are mutually exclusive"));
    }

    if !args.json && !args.text {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(args).await;
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return run_once(args).await;
        }
    }

    run_once(args).await
}

/// Build a `LookupConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> LookupConfig {
    LookupConfig {
        base_url: args.base_url.clone(),
        user_agent: args
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("github-user-lookup/{}", env!("CARGO_PKG_VERSION"))),
    }
}

pub fn build_service(args: &Cli) -> Result<Arc<dyn DirectoryService>> {
    let cfg = build_config(args);
    let client = DirectoryClient::new(&cfg).context("create directory client")?;
    Ok(Arc::new(client))
}

fn notification_line(n: &Notification) -> String {
    match n.kind {
        NotificationKind::Success => format!("✓ {}", n.message),
        NotificationKind::Error => format!("✗ {}", n.message),
    }
}

/// One-shot lookup + aggregation for `--json` / `--text`.
async fn run_once(args: Cli) -> Result<()> {
    let service = build_service(&args)?;
    run_once_with(&args, service).await
}

async fn run_once_with(args: &Cli, service: Arc<dyn DirectoryService>) -> Result<()> {
    let (out_tx, out_handle) = spawn_output_writer();
    let res = lookup_and_print(args, service, &out_tx).await;
    drop(out_tx);
    let _ = out_handle.await;
    res
}

async fn lookup_and_print(
    args: &Cli,
    service: Arc<dyn DirectoryService>,
    out_tx: &mpsc::UnboundedSender<OutputLine>,
) -> Result<()> {
    let username = args.username.clone().unwrap_or_default();

    let outcome = LookupController::new(service.clone())
        .attempt_lookup(&username)
        .await;
    let _ = out_tx.send(OutputLine::Stderr(notification_line(
        &outcome.notification(),
    )));
    let username = outcome.into_result()?;

    // Same hand-off the TUI performs: the results view reads the username back.
    let mut results = ResultsState::new(args.page_size);
    let route = Route::parse(&Route::results_location(&username));
    let Some((token, username)) = results.navigate(&route) else {
        return Ok(());
    };
    let result = AggregationController::new(service)
        .load_aggregation(Some(&username))
        .await;
    results.apply(token, result);

    let failed = results.status() == AggregationStatus::Failed;

    if args.json {
        let out = serde_json::to_string_pretty(&results.result)?;
        let _ = out_tx.send(OutputLine::Stdout(out));
    } else {
        let (repo_page, org_page) = (args.repo_page, args.org_page);
        results.update_page(Table::Repositories, |p, _| p.with_page_index(repo_page));
        results.update_page(Table::Organizations, |p, _| p.with_page_index(org_page));
        let summary = crate::text_summary::build_text_summary(&results);
        for line in summary.lines {
            let _ = out_tx.send(OutputLine::Stdout(line));
        }
    }

    if failed {
        return Err(AggregationError::Failed.into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
