//! Dashboard header component
//!
//! Renders the title and the statistics refresh countdown

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and refresh progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "FRAUDWATCH v{} - {}",
        env!("CARGO_PKG_VERSION"),
        state.environment.api_url()
    );
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // An in-flight prediction takes priority over the countdown
    let (progress_text, gauge_color, progress_percent) = if state.prediction.result
        == crate::view::ResultPanel::Loading
    {
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            "ANALYZING - Waiting for prediction".to_string(),
            Color::LightYellow,
            progress,
        )
    } else {
        match state.secs_until_stats_refresh() {
            Some(remaining) if remaining > 0 => (
                format!("LIVE - Next statistics refresh in {}s", remaining),
                Color::LightBlue,
                state.stats_refresh_progress(),
            ),
            Some(_) => (
                "LIVE - Refreshing statistics".to_string(),
                Color::LightBlue,
                100,
            ),
            None => ("CONNECTING - Loading dashboard".to_string(), Color::Gray, 0),
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
