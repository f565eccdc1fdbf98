//! Statistics panel component

use super::super::state::DashboardState;
use super::super::utils::{FRAUD_COLOR, LEGITIMATE_COLOR};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn stat_line(label: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

/// Render the aggregate statistics.
pub fn render_stats_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let stats = &state.stats;
    let mut lines = vec![
        stat_line("Total: ", stats.total(), Color::White),
        stat_line("Legitimate: ", stats.legitimate_count(), LEGITIMATE_COLOR),
        stat_line("Fraud: ", stats.fraud_count(), FRAUD_COLOR),
        stat_line("Fraud Rate: ", stats.fraud_percentage(), Color::LightYellow),
    ];
    if let Some(avg) = stats.avg_amount() {
        lines.push(stat_line("Avg Amount: ", avg, Color::Cyan));
    }
    if let Some(avg) = stats.avg_fraud_amount() {
        lines.push(stat_line("Avg Fraud: ", avg, FRAUD_COLOR));
    }

    let block = Block::default()
        .title("STATISTICS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
