//! Recurring statistics refresh

use super::core::RefreshContext;
use super::refresh;
use crate::events::{EventType, Source, ViewUpdate};
use crate::logging::LogLevel;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Starts a task that spawns a statistics refresh every `period` until a
/// shutdown signal arrives. The first tick fires one period after start.
/// Every tick, and the start itself, publishes when the next tick is due.
pub fn spawn_stats_timer(
    ctx: RefreshContext,
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let first = Instant::now() + period;
        let mut ticker = interval_at(first, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        publish_schedule(
            &ctx,
            first,
            format!("Refreshing statistics every {}s", period.as_secs()),
        )
        .await;

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {
                    refresh::spawn_stats(&ctx);
                    publish_schedule(&ctx, Instant::now() + period, "Scheduled statistics refresh".to_string()).await;
                }
            }
        }
    })
}

async fn publish_schedule(ctx: &RefreshContext, next_refresh: Instant, msg: String) {
    ctx.events
        .send_update(
            Source::Scheduler,
            msg,
            EventType::Waiting,
            LogLevel::Debug,
            ViewUpdate::StatsSchedule {
                next_refresh: next_refresh.into_std(),
            },
        )
        .await;
}
