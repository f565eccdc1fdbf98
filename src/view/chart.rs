//! Transactions-by-hour chart and its single-owner slot.

use super::hourly::{HourlyBuckets, hour_label};

pub const CHART_TITLE: &str = "Transactions by Hour";
pub const X_AXIS_TITLE: &str = "Hour of Day";
pub const Y_AXIS_TITLE: &str = "Number of Transactions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<u64>,
}

/// A fully built grouped bar chart. Instances are never edited after
/// construction; a new dataset means a new chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyChart {
    pub labels: Vec<String>,
    pub legitimate: Series,
    pub fraud: Series,
    /// Sequence number of this instance within its slot.
    pub instance: u64,
}

impl HourlyChart {
    fn build(buckets: &HourlyBuckets, instance: u64) -> Self {
        let labels = (0..buckets.buckets().len()).map(hour_label).collect();
        let legitimate = buckets
            .buckets()
            .iter()
            .map(|b| b.legitimate_count)
            .collect();
        let fraud = buckets.buckets().iter().map(|b| b.fraud_count).collect();
        Self {
            labels,
            legitimate: Series {
                name: "Legitimate",
                values: legitimate,
            },
            fraud: Series {
                name: "Fraud",
                values: fraud,
            },
            instance,
        }
    }

    /// Upper bound of the y-axis: the tallest bar, at least 1.
    pub fn y_max(&self) -> u64 {
        self.legitimate
            .values
            .iter()
            .chain(self.fraud.values.iter())
            .copied()
            .max()
            .unwrap_or(0)
            .max(1)
    }
}

/// Holds at most one chart. `replace` destroys the current instance before
/// the new one is built.
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<HourlyChart>,
    built: u64,
}

impl ChartSlot {
    pub fn replace(&mut self, buckets: &HourlyBuckets) -> &HourlyChart {
        self.clear();
        self.built += 1;
        self.current.insert(HourlyChart::build(buckets, self.built))
    }

    pub fn clear(&mut self) {
        drop(self.current.take());
    }

    pub fn current(&self) -> Option<&HourlyChart> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Transaction;

    fn buckets(timestamps: &[(&str, bool)]) -> HourlyBuckets {
        let transactions: Vec<Transaction> = timestamps
            .iter()
            .enumerate()
            .map(|(i, (ts, fraud))| Transaction {
                id: i as u64 + 1,
                timestamp: ts.to_string(),
                amount: 1.0,
                is_fraud: *fraud,
                fraud_probability: None,
                result: None,
            })
            .collect();
        HourlyBuckets::from_transactions(&transactions)
    }

    #[test]
    fn chart_has_two_series_over_24_hours() {
        let mut slot = ChartSlot::default();
        let chart = slot.replace(&buckets(&[("2024-01-01T03:00:00", true)]));
        assert_eq!(chart.labels.len(), 24);
        assert_eq!(chart.labels[3], "3:00");
        assert_eq!(chart.legitimate.name, "Legitimate");
        assert_eq!(chart.fraud.values[3], 1);
        assert_eq!(chart.y_max(), 1);
    }

    #[test]
    fn replace_rebuilds_instead_of_updating() {
        let mut slot = ChartSlot::default();
        slot.replace(&buckets(&[("2024-01-01 01:00:00", false)]));
        slot.replace(&buckets(&[
            ("2024-01-01 02:00:00", false),
            ("2024-01-01 02:10:00", false),
        ]));

        let chart = slot.current().unwrap();
        assert_eq!(chart.instance, 2);
        assert_eq!(chart.legitimate.values[1], 0);
        assert_eq!(chart.legitimate.values[2], 2);
    }

    #[test]
    fn empty_dataset_still_has_positive_axis() {
        let mut slot = ChartSlot::default();
        assert_eq!(slot.replace(&HourlyBuckets::default()).y_max(), 1);
        slot.clear();
        assert!(slot.current().is_none());
    }
}
