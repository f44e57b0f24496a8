//! Message vs recovered estimate

use amlab::PipelineOutput;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Points per trace; more than a terminal can show anyway
const MAX_POINTS: usize = 1_000;

pub struct WaveformView {
    message: Vec<(f64, f64)>,
    estimate: Vec<(f64, f64)>,
    duration: f64,
}

impl WaveformView {
    pub fn new(output: &PipelineOutput) -> Self {
        let times = output.grid.times();
        Self {
            message: decimate(times, &output.message),
            estimate: decimate(times, &output.estimate),
            duration: output.grid.duration(),
        }
    }
}

fn decimate(times: &[f64], samples: &[f64]) -> Vec<(f64, f64)> {
    let step = (samples.len() / MAX_POINTS).max(1);
    times
        .iter()
        .zip(samples)
        .step_by(step)
        .map(|(&t, &v)| (t, v))
        .collect()
}

/// Render the message and the filtered estimate on one time axis
pub fn render_waveform(frame: &mut Frame, area: Rect, view: &WaveformView) {
    let block = Block::default()
        .title(" Message m(t) vs estimate ")
        .borders(Borders::ALL);

    let message = Dataset::default()
        .name("m(t)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&view.message);

    let estimate = Dataset::default()
        .name("estimate")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Yellow))
        .data(&view.estimate);

    let chart = Chart::new(vec![message, estimate])
        .block(block)
        .x_axis(
            Axis::default()
                .title("s")
                .bounds([0.0, view.duration])
                .labels(vec!["0".to_string(), format!("{:.2}", view.duration)])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.5, 1.5])
                .labels(vec!["-1.5", "0", "1.5"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
