//! TUI module for amlab
//!
//! Shows the transmitted spectrum and the message recovery once the chain
//! has run. Blocks until the user quits.

mod spectrum;
mod waveform;

use amlab::PipelineOutput;
use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::time::Duration;

use spectrum::{render_spectrum, SpectrumView};
use waveform::{render_waveform, WaveformView};

/// Upper edge of the spectrum plot (Hz)
const SPECTRUM_MAX_HZ: f64 = 2_000.0;

/// UI application state
pub struct UiApp {
    spectrum: SpectrumView,
    waveform: WaveformView,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(output: &PipelineOutput) -> Self {
        Self {
            spectrum: SpectrumView::new(&output.spectrum, SPECTRUM_MAX_HZ),
            waveform: WaveformView::new(output),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // nothing animates, so a slow poll is enough
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc = key {
            self.should_quit = true;
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),    // Spectrum
                Constraint::Length(12), // Message vs estimate
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        render_spectrum(frame, chunks[0], &self.spectrum);
        render_waveform(frame, chunks[1], &self.waveform);

        let help = Paragraph::new(" [Q] Quit").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}
