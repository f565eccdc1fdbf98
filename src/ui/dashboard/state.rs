//! Dashboard state management
//!
//! Holds every view slot of the dashboard plus the activity log

use crate::api::types::PredictionForm;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::controller::tokens::RequestTokens;
use crate::environment::Environment;
use crate::events::Event as ControllerEvent;
use crate::ui::app::UIConfig;
use crate::view::sample::{format_amount, generate_sample_amount};
use crate::view::{ChartSlot, PredictionPanel, RecentList, StatsPanel};

use rand::Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Longest amount the input accepts.
const MAX_AMOUNT_INPUT_LEN: usize = 16;

#[derive(Debug)]
pub struct DashboardState {
    /// The service the dashboard is connected to.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Text of the amount input.
    pub amount_input: String,
    /// Result panel and transaction-id label.
    pub prediction: PredictionPanel,
    /// Statistics display slots.
    pub stats: StatsPanel,
    /// Recent transactions list.
    pub recent: RecentList,
    /// The one chart instance.
    pub chart: ChartSlot,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<ControllerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<ControllerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Interval of the recurring statistics refresh.
    pub stats_interval: Duration,
    /// Animation tick counter
    pub tick: usize,

    /// Used to discard completions that a newer request has superseded
    tokens: RequestTokens,
    /// When the statistics timer fires next
    next_stats_refresh: Option<Instant>,
    /// Completions discarded because a newer request of the same kind exists
    stale_updates: u64,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        environment: Environment,
        start_time: Instant,
        tokens: RequestTokens,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            environment,
            start_time,
            amount_input: String::new(),
            prediction: PredictionPanel::default(),
            stats: StatsPanel::default(),
            recent: RecentList::default(),
            chart: ChartSlot::default(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            stats_interval: ui_config.stats_interval,
            tick: 0,
            tokens,
            next_stats_refresh: None,
            stale_updates: 0,
        }
    }

    pub fn tokens(&self) -> &RequestTokens {
        &self.tokens
    }

    pub fn next_stats_refresh(&self) -> Option<Instant> {
        self.next_stats_refresh
    }

    pub fn set_next_stats_refresh(&mut self, at: Instant) {
        self.next_stats_refresh = Some(at);
    }

    pub fn stale_updates(&self) -> u64 {
        self.stale_updates
    }

    pub fn record_stale_update(&mut self) {
        self.stale_updates += 1;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ControllerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: ControllerEvent) {
        self.pending_events.push_back(event);
    }

    /// Appends a character to the amount input if it can be part of a number.
    pub fn push_amount_char(&mut self, c: char) {
        let allowed = c.is_ascii_digit()
            || (c == '.' && !self.amount_input.contains('.'))
            || (c == '-' && self.amount_input.is_empty());
        if allowed && self.amount_input.len() < MAX_AMOUNT_INPUT_LEN {
            self.amount_input.push(c);
        }
    }

    pub fn pop_amount_char(&mut self) {
        self.amount_input.pop();
    }

    /// Writes a random sample amount and hides any previous result.
    pub fn fill_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.amount_input = format_amount(generate_sample_amount(rng));
        self.prediction.hide();
    }

    /// The form as it would be submitted right now.
    pub fn form(&self) -> PredictionForm {
        PredictionForm::new(self.amount_input.trim())
    }
}
