//! Recent transactions component

use super::super::state::DashboardState;
use super::super::utils::get_verdict_color;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding};

/// Render the newest transactions, or the list placeholder.
pub fn render_transactions_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
) {
    let items: Vec<ListItem> = match state.recent.placeholder() {
        Some(message) => vec![ListItem::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Gray),
        )))],
        None => state
            .recent
            .items()
            .iter()
            .map(|item| {
                let color = get_verdict_color(item.verdict);
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", item.title()),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(item.status_text(), Style::default().fg(color)),
                    ]),
                    Line::from(Span::styled(
                        item.detail(),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect(),
    };

    let block = Block::default()
        .title("RECENT TRANSACTIONS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(List::new(items).block(block), area);
}
