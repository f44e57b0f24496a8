//! Spectrum widget
//!
//! Log-magnitude spectrum of the transmitted signal: the carrier line with
//! one sideband on each side.

use amlab::dsp::Spectrum;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Chart-ready spectrum: `(frequency_hz, log10 |S|)` up to a cutoff.
pub struct SpectrumView {
    data: Vec<(f64, f64)>,
    max_hz: f64,
    /// Decades shown on the y axis
    decades: [f64; 2],
}

impl SpectrumView {
    pub fn new(spectrum: &Spectrum, max_hz: f64) -> Self {
        let data = spectrum.band(max_hz);

        let lo = data.iter().map(|(_, db)| *db).fold(f64::INFINITY, f64::min);
        let hi = data
            .iter()
            .map(|(_, db)| *db)
            .fold(f64::NEG_INFINITY, f64::max);
        let decades = if lo.is_finite() && hi.is_finite() {
            [lo.floor(), hi.ceil().max(lo.floor() + 1.0)]
        } else {
            [-12.0, 0.0]
        };

        Self {
            data,
            max_hz,
            decades,
        }
    }
}

/// Render the spectrum widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, view: &SpectrumView) {
    let block = Block::default()
        .title(" Spectrum |S(f)| ")
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&view.data);

    let [lo, hi] = view.decades;
    let mid = ((lo + hi) / 2.0).round();
    let y_labels: Vec<String> = [lo, mid, hi]
        .iter()
        .map(|e| format!("1e{}", *e as i32))
        .collect();
    let x_labels: Vec<String> = [0.0, view.max_hz / 2.0, view.max_hz]
        .iter()
        .map(|f| format!("{f:.0}"))
        .collect();

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Hz")
                .bounds([0.0, view.max_hz])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("|S|")
                .bounds([lo, hi])
                .labels(y_labels)
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
