//! View model
//!
//! Pure, terminal-independent state for every panel of the dashboard. The
//! renderer reads these types; the updaters write them.

pub mod chart;
pub mod hourly;
pub mod recent;
pub mod result;
pub mod sample;
pub mod stats;

pub use chart::{ChartSlot, HourlyChart};
pub use hourly::{HourlyBucket, HourlyBuckets};
pub use recent::{RecentItem, RecentList};
pub use result::{PredictionPanel, ResultPanel, Verdict};
pub use stats::StatsPanel;

/// Formats a number the way the service's web page prints it: no trailing
/// zeros and no decimal point for whole values (`3.2`, `3`, `47.25`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn formats_numbers_without_padding() {
        assert_eq!(format_number(3.2), "3.2");
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(47.25), "47.25");
        assert_eq!(format_number(0.0), "0");
    }
}
