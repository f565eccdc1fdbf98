//! Event System
//!
//! Types and implementations for controller events and logging

use crate::api::types::StatsSnapshot;
use crate::controller::tokens::RequestToken;
use crate::logging::{LogLevel, should_log_with_env};
use crate::view::{HourlyBuckets, RecentList, ResultPanel};
use chrono::Local;
use std::fmt::Display;
use std::time::Instant;

/// Which part of the controller produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Prediction submission and its result panel.
    Prediction,
    /// Statistics refresh.
    Stats,
    /// Recent-transactions refresh.
    Transactions,
    /// Hourly chart refresh.
    Chart,
    /// The recurring statistics timer.
    Scheduler,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    StateChange,
}

/// A view change carried by an event. Every variant that answers a request
/// carries the token it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// A submission is in flight.
    PredictionStarted { token: RequestToken },
    /// A submission settled into a result or error panel.
    PredictionFinished {
        token: RequestToken,
        panel: ResultPanel,
    },
    Stats {
        token: RequestToken,
        snapshot: StatsSnapshot,
    },
    Transactions {
        token: RequestToken,
        list: RecentList,
    },
    Chart {
        token: RequestToken,
        buckets: HourlyBuckets,
    },
    /// When the statistics timer fires next. Not a request answer, so it
    /// carries no token.
    StatsSchedule { next_refresh: Instant },
}

impl ViewUpdate {
    pub fn token(&self) -> Option<RequestToken> {
        match self {
            ViewUpdate::PredictionStarted { token }
            | ViewUpdate::PredictionFinished { token, .. }
            | ViewUpdate::Stats { token, .. }
            | ViewUpdate::Transactions { token, .. }
            | ViewUpdate::Chart { token, .. } => Some(*token),
            ViewUpdate::StatsSchedule { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// View change to apply, for events that carry one
    pub update: Option<ViewUpdate>,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            update: None,
        }
    }

    pub fn with_update(mut self, update: ViewUpdate) -> Self {
        self.update = Some(update);
        self
    }

    pub fn should_display(&self) -> bool {
        // StateChange events drive the view and stay out of the log
        if self.event_type == EventType::StateChange {
            return false;
        }
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}
