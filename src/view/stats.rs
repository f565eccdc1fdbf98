//! Statistics panel

use super::format_number;
use crate::api::types::StatsSnapshot;

/// Four display slots plus the optional averages. Empty until the first
/// successful refresh; a failed refresh leaves the previous values in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsPanel {
    snapshot: Option<StatsSnapshot>,
}

impl StatsPanel {
    pub fn apply(&mut self, snapshot: StatsSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<&StatsSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn total(&self) -> String {
        self.slot(|s| s.total.to_string())
    }

    pub fn legitimate_count(&self) -> String {
        self.slot(|s| s.legitimate_count.to_string())
    }

    pub fn fraud_count(&self) -> String {
        self.slot(|s| s.fraud_count.to_string())
    }

    pub fn fraud_percentage(&self) -> String {
        self.slot(|s| format!("{}%", format_number(s.fraud_percentage)))
    }

    pub fn avg_amount(&self) -> Option<String> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.avg_amount)
            .map(|v| format!("${:.2}", v))
    }

    pub fn avg_fraud_amount(&self) -> Option<String> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.avg_fraud_amount)
            .map(|v| format!("${:.2}", v))
    }

    fn slot(&self, f: impl Fn(&StatsSnapshot) -> String) -> String {
        self.snapshot.as_ref().map(f).unwrap_or_else(|| "-".to_string())
    }
}
