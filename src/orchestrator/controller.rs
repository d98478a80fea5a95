//! Request lifecycle controller.
//!
//! Owns the in-flight lookup and aggregation tasks and emits events for presentation layers.

use crate::engine::DirectoryService;
use crate::model::{AggregationResult, AppEvent};
use crate::orchestrator::aggregation::{failed, AggregationController};
use crate::orchestrator::lookup::{LookupController, LookupOutcome};
use crate::orchestrator::RequestToken;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Commands emitted by UI layers.
#[derive(Debug, Clone)]
pub enum UiCommand {
    /// Run the existence check for a username typed on the home screen.
    Search(String),
    /// Load results for a username; supersedes any earlier load.
    Load {
        token: RequestToken,
        username: String,
    },
    /// Stop caring about the current load (user went back home).
    Abandon,
    Quit,
}

/// Wait for an optional task without taking its handle, so a losing select branch
/// never drops it.
async fn join_opt<T>(handle: &mut Option<JoinHandle<T>>) -> Result<T, tokio::task::JoinError> {
    match handle.as_mut() {
        Some(h) => h.await,
        None => futures::future::pending().await,
    }
}

/// Drive lookups and aggregations based on UI commands.
pub async fn run_controller(
    service: Arc<dyn DirectoryService>,
    event_tx: UnboundedSender<AppEvent>,
    mut cmd_rx: UnboundedReceiver<UiCommand>,
) -> Result<()> {
    let lookup = Arc::new(LookupController::new(service.clone()));
    let aggregation = Arc::new(AggregationController::new(service));

    let mut lookup_task: Option<JoinHandle<LookupOutcome>> = None;
    let mut load_task: Option<JoinHandle<AggregationResult>> = None;
    let mut load_ctx: Option<(RequestToken, String)> = None;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UiCommand::Search(username)) => {
                        if lookup_task.is_some() {
                            tracing::debug!(username = %username, "lookup already in flight; ignoring");
                            continue;
                        }
                        let lookup = lookup.clone();
                        lookup_task = Some(tokio::spawn(async move {
                            lookup.attempt_lookup(&username).await
                        }));
                    }
                    Some(UiCommand::Load { token, username }) => {
                        // A newer load cancels interest in the previous one.
                        if let Some(prev) = load_task.take() {
                            prev.abort();
                            if let Some((prev_token, _)) = load_ctx.take() {
                                tracing::debug!(token = %prev_token, "superseded aggregation");
                            }
                        }
                        let aggregation = aggregation.clone();
                        let name = username.clone();
                        load_task = Some(tokio::spawn(async move {
                            aggregation.load_aggregation(Some(&name)).await
                        }));
                        load_ctx = Some((token, username));
                    }
                    Some(UiCommand::Abandon) => {
                        if let Some(prev) = load_task.take() {
                            prev.abort();
                        }
                        load_ctx = None;
                    }
                    Some(UiCommand::Quit) | None => {
                        if let Some(h) = lookup_task.take() {
                            h.abort();
                        }
                        if let Some(h) = load_task.take() {
                            h.abort();
                        }
                        break Ok(());
                    }
                }
            }
            done = join_opt(&mut lookup_task) => {
                lookup_task = None;
                let outcome = match done {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        tracing::warn!(error = %e, "lookup task failed");
                        LookupOutcome::Failure(crate::error::LookupError::NotFoundOrService)
                    }
                };
                let _ = event_tx.send(AppEvent::LookupFinished {
                    location: outcome.location(),
                    notification: outcome.notification(),
                });
            }
            done = join_opt(&mut load_task) => {
                load_task = None;
                let Some((token, username)) = load_ctx.take() else {
                    continue;
                };
                let result = match done {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::warn!(token = %token, error = %e, "aggregation task failed");
                        failed(&username)
                    }
                };
                let _ = event_tx.send(AppEvent::AggregationCompleted {
                    token,
                    result: Box::new(result),
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
