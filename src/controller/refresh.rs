//! Independent view refreshes
//!
//! Each refresh issues its own token, performs one fetch and reports one
//! event. A failure in one never affects the others.

use super::core::RefreshContext;
use super::tokens::RefreshKind;
use crate::events::{EventType, Source, ViewUpdate};
use crate::logging::LogLevel;
use crate::view::{HourlyBuckets, RecentList};
use tokio::task::JoinHandle;

/// Fetches the stats snapshot. On failure the panel keeps its previous values.
pub async fn refresh_stats(ctx: &RefreshContext) {
    let token = ctx.tokens.issue(RefreshKind::Stats);
    match ctx.api.stats().await {
        Ok(snapshot) => {
            ctx.events
                .send_update(
                    Source::Stats,
                    format!(
                        "Statistics: {} total, {} fraud ({}%)",
                        snapshot.total,
                        snapshot.fraud_count,
                        crate::view::format_number(snapshot.fraud_percentage)
                    ),
                    EventType::Refresh,
                    LogLevel::Debug,
                    ViewUpdate::Stats { token, snapshot },
                )
                .await;
        }
        Err(e) => ctx.report_failure(Source::Stats, "Error loading stats", &e).await,
    }
}

/// Fetches all transactions and rebuilds the recent list, or its error placeholder.
pub async fn refresh_transactions(ctx: &RefreshContext) {
    let token = ctx.tokens.issue(RefreshKind::Transactions);
    match ctx.api.transactions().await {
        Ok(transactions) => {
            let list = RecentList::from_transactions(&transactions);
            ctx.events
                .send_update(
                    Source::Transactions,
                    format!("Loaded {} transactions", transactions.len()),
                    EventType::Refresh,
                    LogLevel::Debug,
                    ViewUpdate::Transactions { token, list },
                )
                .await;
        }
        Err(e) => {
            let log_level = ctx.classifier.classify(&e);
            ctx.events
                .send_update(
                    Source::Transactions,
                    format!("Error loading transactions: {}", e),
                    EventType::Error,
                    log_level,
                    ViewUpdate::Transactions {
                        token,
                        list: RecentList::Error,
                    },
                )
                .await;
        }
    }
}

/// Fetches all transactions and buckets them by hour for a new chart.
pub async fn refresh_chart(ctx: &RefreshContext) {
    let token = ctx.tokens.issue(RefreshKind::Chart);
    match ctx.api.transactions().await {
        Ok(transactions) => {
            let buckets = HourlyBuckets::from_transactions(&transactions);
            if buckets.skipped() > 0 {
                ctx.events
                    .send(
                        Source::Chart,
                        format!(
                            "Skipped {} transactions with unreadable timestamps",
                            buckets.skipped()
                        ),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
            ctx.events
                .send_update(
                    Source::Chart,
                    format!("Chart rebuilt from {} transactions", buckets.total()),
                    EventType::Refresh,
                    LogLevel::Debug,
                    ViewUpdate::Chart { token, buckets },
                )
                .await;
        }
        Err(e) => {
            ctx.report_failure(Source::Chart, "Error loading chart data", &e)
                .await
        }
    }
}

/// Spawns the three refreshes as separate tasks.
pub fn spawn_all(ctx: &RefreshContext) -> Vec<JoinHandle<()>> {
    vec![
        spawn_stats(ctx),
        spawn_transactions(ctx),
        spawn_chart(ctx),
    ]
}

pub fn spawn_stats(ctx: &RefreshContext) -> JoinHandle<()> {
    let ctx = ctx.clone();
    tokio::spawn(async move { refresh_stats(&ctx).await })
}

pub fn spawn_transactions(ctx: &RefreshContext) -> JoinHandle<()> {
    let ctx = ctx.clone();
    tokio::spawn(async move { refresh_transactions(&ctx).await })
}

pub fn spawn_chart(ctx: &RefreshContext) -> JoinHandle<()> {
    let ctx = ctx.clone();
    tokio::spawn(async move { refresh_chart(&ctx).await })
}
