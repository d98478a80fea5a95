mod cli;
mod engine;
mod error;
mod model;
mod orchestrator;
#[cfg(test)]
mod test_support;
mod text_summary;
#[cfg(feature = "tui")]
mod tui;
mod view;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG`. The TUI owns the terminal, so it only
/// gets a subscriber when logging was asked for explicitly.
fn init_tracing(is_tui: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) if is_tui => return,
        Err(_) => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let is_tui = args.is_tui();
    init_tracing(is_tui);

    match cli::run(args).await {
        Ok(()) => Ok(()),
        Err(e) if !is_tui => {
            // Lookup/aggregation failures were already reported to the user.
            let reported = e.downcast_ref::<error::LookupError>().is_some()
                || e.downcast_ref::<error::AggregationError>().is_some();
            if !reported {
                eprintln!("Error: {e:#}");
            }
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}
