//! Prediction form and result panel
//!
//! Renders the amount input, the verdict, the probability meter and the
//! transaction-id label

use super::super::state::DashboardState;
use super::super::utils::get_verdict_color;
use crate::view::ResultPanel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap};

pub fn render_prediction_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let outer = Block::default()
        .title("CHECK TRANSACTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    render_amount_input(f, chunks[0], state);
    render_result(f, chunks[1], &state.prediction.result);

    if let ResultPanel::Result(view) = &state.prediction.result {
        let color = get_verdict_color(view.verdict);
        let meter = Gauge::default()
            .block(
                Block::default()
                    .title("Fraud Probability")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            )
            .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .use_unicode(true)
            .ratio(view.meter_ratio())
            .label(view.probability_label());
        f.render_widget(meter, chunks[2]);
    }

    if let Some(label) = &state.prediction.transaction_label {
        f.render_widget(
            Paragraph::new(label.as_str()).style(Style::default().fg(Color::Gray)),
            chunks[3],
        );
    }
}

fn render_amount_input(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Blinking cursor
    let cursor = if (state.tick / 5) % 2 == 0 { "_" } else { " " };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("$ ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.amount_input.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title("Amount")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(input, area);
}

fn render_result(f: &mut Frame, area: Rect, result: &ResultPanel) {
    if !result.is_visible() {
        let hint = Paragraph::new("Enter an amount or press [S] for a sample")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(hint, area);
        return;
    }
    let Some(verdict) = result.verdict() else {
        return;
    };
    let color = get_verdict_color(verdict);
    let text = match result {
        ResultPanel::Result(view) => format!("{} {}", verdict.icon(), view.prediction),
        other => other.text(),
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
