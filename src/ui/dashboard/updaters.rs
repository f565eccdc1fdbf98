//! Dashboard state update logic
//!
//! Applies controller events to the view slots

use super::state::DashboardState;

use crate::events::{Event as ControllerEvent, ViewUpdate};

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with a new tick and any queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);

            if event.should_display() {
                self.add_to_activity_log(event);
            }
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &ControllerEvent) {
        if let Some(update) = &event.update {
            self.apply_update(update.clone());
        }
    }

    /// Applies a view update unless a newer request of the same kind has
    /// been issued since.
    pub fn apply_update(&mut self, update: ViewUpdate) -> bool {
        if let Some(token) = update.token() {
            if !self.tokens().is_current(token) {
                self.record_stale_update();
                return false;
            }
        }

        match update {
            ViewUpdate::PredictionStarted { .. } => self.prediction.begin(),
            ViewUpdate::PredictionFinished { panel, .. } => self.prediction.finish(panel),
            ViewUpdate::Stats { snapshot, .. } => self.stats.apply(snapshot),
            ViewUpdate::Transactions { list, .. } => self.recent = list,
            ViewUpdate::Chart { buckets, .. } => {
                self.chart.replace(&buckets);
            }
            ViewUpdate::StatsSchedule { next_refresh } => self.set_next_stats_refresh(next_refresh),
        }
        true
    }

    /// Fraction of the statistics interval that has elapsed, 0 to 100.
    pub fn stats_refresh_progress(&self) -> u16 {
        let Some(next) = self.next_stats_refresh() else {
            return 0;
        };
        let interval = self.stats_interval.as_secs_f64();
        if interval <= 0.0 {
            return 100;
        }
        let remaining = next.saturating_duration_since(Instant::now()).as_secs_f64();
        ((1.0 - remaining / interval) * 100.0).clamp(0.0, 100.0) as u16
    }

    /// Whole seconds left until the statistics timer fires, rounded up.
    pub fn secs_until_stats_refresh(&self) -> Option<u64> {
        self.next_stats_refresh().map(|next| {
            let remaining = next.saturating_duration_since(Instant::now());
            remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::api::types::{Prediction, StatsSnapshot, Transaction};
    use crate::controller::tokens::{RefreshKind, RequestTokens};
    use crate::environment::Environment;
    use crate::events::{Event, EventType, Source, ViewUpdate};
    use crate::logging::LogLevel;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::DashboardState;
    use crate::view::result::PredictionView;
    use crate::view::{HourlyBuckets, RecentList, ResultPanel};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::{Duration, Instant};

    fn state() -> (DashboardState, RequestTokens) {
        let tokens = RequestTokens::new();
        let state = DashboardState::new(
            Environment::Local,
            Instant::now(),
            tokens.clone(),
            UIConfig::new(false, Duration::from_secs(30)),
        );
        (state, tokens)
    }

    fn stats(total: u64) -> StatsSnapshot {
        StatsSnapshot {
            total,
            legitimate_count: total,
            ..Default::default()
        }
    }

    #[test]
    fn stale_stats_never_overwrite_newer_ones() {
        let (mut state, tokens) = state();
        let older = tokens.issue(RefreshKind::Stats);
        let newer = tokens.issue(RefreshKind::Stats);

        assert!(state.apply_update(ViewUpdate::Stats {
            token: newer,
            snapshot: stats(10),
        }));
        assert!(!state.apply_update(ViewUpdate::Stats {
            token: older,
            snapshot: stats(4),
        }));

        assert_eq!(state.stats.total(), "10");
        assert_eq!(state.stale_updates(), 1);
    }

    #[test]
    fn prediction_events_drive_result_panel() {
        let (mut state, tokens) = state();
        let token = tokens.issue(RefreshKind::Prediction);

        state.add_event(
            Event::new(
                Source::Prediction,
                "Analyzing".to_string(),
                EventType::StateChange,
                LogLevel::Info,
            )
            .with_update(ViewUpdate::PredictionStarted { token }),
        );
        state.update();
        assert_eq!(state.prediction.result, ResultPanel::Loading);
        assert!(state.activity_logs.is_empty());

        let view = PredictionView::from(Prediction {
            prediction: "Fraud Detected".to_string(),
            is_fraud: true,
            fraud_probability: 87.5,
            transaction_id: 12,
        });
        state.add_event(
            Event::new(
                Source::Prediction,
                "done".to_string(),
                EventType::Success,
                LogLevel::Info,
            )
            .with_update(ViewUpdate::PredictionFinished {
                token,
                panel: ResultPanel::Result(view),
            }),
        );
        state.update();
        assert_eq!(
            state.prediction.transaction_label.as_deref(),
            Some("Transaction ID: #12")
        );
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    fn chart_updates_replace_the_single_instance() {
        let (mut state, tokens) = state();
        for _ in 0..3 {
            let token = tokens.issue(RefreshKind::Chart);
            state.apply_update(ViewUpdate::Chart {
                token,
                buckets: HourlyBuckets::default(),
            });
        }
        assert_eq!(state.chart.current().unwrap().instance, 3);
    }

    #[test]
    fn transactions_update_replaces_list() {
        let (mut state, tokens) = state();
        let token = tokens.issue(RefreshKind::Transactions);
        let list = RecentList::from_transactions(&[Transaction {
            id: 1,
            timestamp: "2024-01-01 00:00:00".to_string(),
            amount: 5.0,
            is_fraud: false,
            fraud_probability: None,
            result: None,
        }]);
        state.apply_update(ViewUpdate::Transactions { token, list });
        assert_eq!(state.recent.items().len(), 1);
    }

    #[test]
    fn sample_fill_hides_previous_result() {
        let (mut state, tokens) = state();
        let token = tokens.issue(RefreshKind::Prediction);
        state.apply_update(ViewUpdate::PredictionFinished {
            token,
            panel: ResultPanel::rejected("invalid amount"),
        });

        state.fill_sample(&mut StdRng::seed_from_u64(7));

        assert!(!state.prediction.result.is_visible());
        let amount: f64 = state.amount_input.parse().unwrap();
        assert!((1.0..=1000.0).contains(&amount));
        assert_eq!(state.form().amount, state.amount_input);
    }

    #[test]
    fn amount_input_accepts_only_numeric_text() {
        let (mut state, _) = state();
        for c in "12a.5.0x".chars() {
            state.push_amount_char(c);
        }
        assert_eq!(state.amount_input, "12.50");
        state.pop_amount_char();
        assert_eq!(state.amount_input, "12.5");
    }

    #[test]
    fn refresh_countdown_follows_the_timer_schedule() {
        let (mut state, tokens) = state();
        assert_eq!(state.secs_until_stats_refresh(), None);
        assert_eq!(state.stats_refresh_progress(), 0);

        // Applying statistics does not move the countdown
        let token = tokens.issue(RefreshKind::Stats);
        state.apply_update(ViewUpdate::Stats {
            token,
            snapshot: stats(1),
        });
        assert_eq!(state.secs_until_stats_refresh(), None);

        assert!(state.apply_update(ViewUpdate::StatsSchedule {
            next_refresh: Instant::now() + Duration::from_secs(30),
        }));
        assert!(matches!(state.secs_until_stats_refresh(), Some(29..=30)));
        assert!(state.stats_refresh_progress() <= 1);

        // A manual refresh in between keeps the timer's schedule
        let manual = tokens.issue(RefreshKind::Stats);
        state.apply_update(ViewUpdate::Stats {
            token: manual,
            snapshot: stats(2),
        });
        assert!(matches!(state.secs_until_stats_refresh(), Some(29..=30)));
    }

    #[test]
    fn overdue_schedule_counts_as_refreshing() {
        let (mut state, _) = state();
        state.apply_update(ViewUpdate::StatsSchedule {
            next_refresh: Instant::now(),
        });
        assert_eq!(state.secs_until_stats_refresh(), Some(0));
        assert_eq!(state.stats_refresh_progress(), 100);
    }
}
