//! Application-level orchestration.
//!
//! This module owns the lookup and aggregation workflows and the command loop
//! that runs them on behalf of the TUI. CLI modes call the controllers directly.

mod aggregation;
#[cfg_attr(not(feature = "tui"), allow(dead_code))]
mod controller;
mod lookup;
mod tracker;

pub use aggregation::AggregationController;
#[cfg(test)]
pub use aggregation::merge_aggregation;
#[cfg_attr(not(feature = "tui"), allow(unused_imports))]
pub(crate) use controller::{run_controller, UiCommand};
pub use lookup::LookupController;
#[cfg(test)]
pub use lookup::LookupOutcome;
pub use tracker::{RequestToken, RequestTracker};

#[cfg(test)]
#[path = "tests/workflow_tests.rs"]
mod tests;
