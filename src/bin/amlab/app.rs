//! AmLab - runs the AM chain once and hands the arrays to the UI

use amlab::{AmConfig, AmPipeline};
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing::info;

use super::ui::UiApp;

/// Filter transient ignored when scoring the recovered message (seconds)
const SETTLE_SECS: f64 = 0.25;

/// Main application
pub struct AmLab {
    config: AmConfig,
}

impl AmLab {
    pub fn new(config: AmConfig) -> Self {
        Self { config }
    }

    /// Run the chain, print the time-step diagnostic, then block on the
    /// spectrum window until the user quits.
    pub fn run(self) -> EyreResult<()> {
        let pipeline = AmPipeline::new(self.config).wrap_err("invalid AM configuration")?;
        let output = pipeline
            .run(&mut pipeline.rng())
            .wrap_err("AM chain failed")?;

        println!("len(t)={}, dt={:.6}s", output.grid.len(), output.grid.dt());

        if let Some(recovery) = output.recovery(SETTLE_SECS) {
            info!(
                correlation = recovery.correlation,
                delay_ms = recovery.lag as f64 * output.grid.dt() * 1e3,
                "recovered message vs original"
            );
        }

        let mut terminal = ratatui::init();
        let result = UiApp::new(&output).run(&mut terminal);
        ratatui::restore();
        result
    }
}
