//! amlab - AM transmission and envelope demodulation in the terminal
//!
//! Run with: cargo run
//! Stage-by-stage tracing goes to stderr: RUST_LOG=amlab=debug cargo run

mod app;
mod ui;

use amlab::AmConfig;
use app::AmLab;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    AmLab::new(AmConfig::default()).run()
}
