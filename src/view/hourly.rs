//! Hour-of-day aggregation for the transactions chart.

use crate::api::types::Transaction;
use crate::consts::cli_consts::HOURS_PER_DAY;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

/// Timestamp layouts without an offset. They are read as local time.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourlyBucket {
    pub fraud_count: u64,
    pub legitimate_count: u64,
}

impl HourlyBucket {
    pub fn total(&self) -> u64 {
        self.fraud_count + self.legitimate_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyBuckets {
    buckets: [HourlyBucket; HOURS_PER_DAY],
    /// Transactions whose timestamp could not be read.
    skipped: usize,
}

impl Default for HourlyBuckets {
    fn default() -> Self {
        Self {
            buckets: [HourlyBucket::default(); HOURS_PER_DAY],
            skipped: 0,
        }
    }
}

impl HourlyBuckets {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut acc, tx| {
                acc.record(tx);
                acc
            })
    }

    fn record(&mut self, tx: &Transaction) {
        match local_hour(&tx.timestamp) {
            Some(hour) => {
                let bucket = &mut self.buckets[hour];
                if tx.is_fraud {
                    bucket.fraud_count += 1;
                } else {
                    bucket.legitimate_count += 1;
                }
            }
            None => self.skipped += 1,
        }
    }

    pub fn buckets(&self) -> &[HourlyBucket; HOURS_PER_DAY] {
        &self.buckets
    }

    pub fn hour(&self, hour: usize) -> Option<&HourlyBucket> {
        self.buckets.get(hour)
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn total_fraud(&self) -> u64 {
        self.buckets.iter().map(|b| b.fraud_count).sum()
    }

    pub fn total_legitimate(&self) -> u64 {
        self.buckets.iter().map(|b| b.legitimate_count).sum()
    }

    pub fn total(&self) -> u64 {
        self.total_fraud() + self.total_legitimate()
    }
}

/// Label of an hour bucket, `0:00` through `23:00`.
pub fn hour_label(hour: usize) -> String {
    format!("{}:00", hour)
}

/// Local hour-of-day of a transaction timestamp.
///
/// Timestamps with an offset are converted to local time; timestamps without
/// one are already local; a bare date means midnight UTC.
pub fn local_hour(timestamp: &str) -> Option<usize> {
    let timestamp = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Local).hour() as usize);
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, format) {
            return Some(naive.hour() as usize);
        }
    }
    let date = NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()?;
    let midnight = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
    Some(midnight.with_timezone(&Local).hour() as usize)
}
