//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::view::Verdict;
use ratatui::prelude::Color;

/// Bar and text color for legitimate transactions.
pub const LEGITIMATE_COLOR: Color = Color::Rgb(28, 200, 138);
/// Bar and text color for fraudulent transactions.
pub const FRAUD_COLOR: Color = Color::Rgb(231, 74, 59);

/// Get a ratatui color for an event based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Prediction => Color::Yellow,
        Source::Stats => Color::Cyan,
        Source::Transactions => Color::LightBlue,
        Source::Chart => Color::Magenta,
        Source::Scheduler => Color::DarkGray,
    }
}

pub fn get_verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Fraud => FRAUD_COLOR,
        Verdict::Legitimate => LEGITIMATE_COLOR,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD and HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") || msg.contains("Connection refused") {
        return "Fraud API unreachable".to_string();
    }
    if msg.contains("operation timed out") || msg.contains("TimedOut") {
        return "Fraud API timed out".to_string();
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_month_day_and_minutes() {
        assert_eq!(
            format_compact_timestamp("2024-03-15 09:41:27"),
            "03-15 09:41"
        );
    }

    #[test]
    fn compact_timestamp_falls_back_to_input() {
        assert_eq!(format_compact_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn transport_noise_is_shortened() {
        let msg = "Stats refresh failed: error sending request for url (http://127.0.0.1:9/api/stats)";
        assert_eq!(clean_http_error_message(msg), "Fraud API unreachable");
        assert_eq!(clean_http_error_message("HTTP 500"), "HTTP 500");
    }
}
