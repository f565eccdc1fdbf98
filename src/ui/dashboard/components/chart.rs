//! Transactions-by-hour chart component
//!
//! Draws the current chart instance as grouped bars, one group per hour

use super::super::state::DashboardState;
use super::super::utils::{FRAUD_COLOR, LEGITIMATE_COLOR};
use crate::view::HourlyChart;
use crate::view::chart::{CHART_TITLE, X_AXIS_TITLE, Y_AXIS_TITLE};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};

fn hour_group<'a>(chart: &'a HourlyChart, hour: usize) -> BarGroup<'a> {
    let legitimate = chart.legitimate.values.get(hour).copied().unwrap_or(0);
    let fraud = chart.fraud.values.get(hour).copied().unwrap_or(0);
    // Only every third label fits under narrow groups
    let label = if hour % 3 == 0 {
        chart.labels[hour].as_str()
    } else {
        ""
    };
    BarGroup::default()
        .label(Line::from(label))
        .bars(&[
            Bar::default()
                .value(legitimate)
                .text_value(String::new())
                .style(Style::default().fg(LEGITIMATE_COLOR)),
            Bar::default()
                .value(fraud)
                .text_value(String::new())
                .style(Style::default().fg(FRAUD_COLOR)),
        ])
}

pub fn render_chart_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let legend = Line::from(vec![
        Span::styled("■ Legitimate  ", Style::default().fg(LEGITIMATE_COLOR)),
        Span::styled("■ Fraud", Style::default().fg(FRAUD_COLOR)),
    ]);
    let block = Block::default()
        .title(CHART_TITLE)
        .title(legend.right_aligned())
        .title_bottom(
            Line::from(format!("x: {} | y: {}", X_AXIS_TITLE, Y_AXIS_TITLE))
                .alignment(Alignment::Center),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(chart) = state.chart.current() else {
        let waiting = Paragraph::new("Loading chart...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(waiting, area);
        return;
    };

    let mut bar_chart = BarChart::default()
        .block(block)
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1)
        .max(chart.y_max());
    for hour in 0..chart.labels.len() {
        bar_chart = bar_chart.data(hour_group(chart, hour));
    }

    f.render_widget(bar_chart, area);
}
