//! View state shared by the TUI and text modes.
//!
//! Pure state and transitions only; nothing here performs I/O.

#[cfg_attr(not(feature = "tui"), allow(dead_code))]
mod home;
pub mod pagination;
mod results;
mod route;

#[cfg_attr(not(feature = "tui"), allow(unused_imports))]
pub use home::HomeState;
pub use pagination::PageSize;
pub use results::{ResultsState, Table};
pub use route::Route;
