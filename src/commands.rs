//! One-shot commands.
//!
//! Each command talks to the fraud API (or the config file) once and returns
//! the lines to print, so the formatting can be tested without a terminal.

use crate::api::FraudApi;
use crate::api::error::ApiError;
use crate::api::types::{PredictionForm, PredictionOutcome, Transaction};
use crate::config::Config;
use crate::environment::Environment;
use crate::view::recent::newest_first;
use crate::view::result::PredictionView;
use crate::view::{HourlyBuckets, RecentList, ResultPanel, StatsPanel, Verdict};
use std::path::Path;

/// Submits one prediction and returns the panel the dashboard would show.
/// A `success: false` reply is a panel, not an error.
pub async fn predict(api: &dyn FraudApi, amount: &str) -> Result<ResultPanel, ApiError> {
    let response = api.predict(PredictionForm::new(amount.trim())).await?;
    match response.outcome() {
        Some(PredictionOutcome::Accepted(prediction)) => {
            Ok(ResultPanel::Result(PredictionView::from(prediction)))
        }
        Some(PredictionOutcome::Rejected { error }) => Ok(ResultPanel::rejected(&error)),
        None => Err(ApiError::Malformed(
            "prediction response is incomplete".to_string(),
        )),
    }
}

pub fn result_lines(panel: &ResultPanel) -> Vec<String> {
    match panel {
        ResultPanel::Result(view) => vec![
            format!("{} {}", view.verdict.icon(), view.prediction),
            format!("Fraud probability: {}", view.probability_label()),
            view.transaction_label(),
        ],
        other => vec![other.text()],
    }
}

pub async fn stats(api: &dyn FraudApi) -> Result<StatsPanel, ApiError> {
    let mut panel = StatsPanel::default();
    panel.apply(api.stats().await?);
    Ok(panel)
}

pub fn stats_lines(panel: &StatsPanel) -> Vec<String> {
    let mut lines = vec![
        format!("Total transactions: {}", panel.total()),
        format!("Legitimate:         {}", panel.legitimate_count()),
        format!("Fraud:              {}", panel.fraud_count()),
        format!("Fraud rate:         {}", panel.fraud_percentage()),
    ];
    if let Some(avg) = panel.avg_amount() {
        lines.push(format!("Average amount:     {}", avg));
    }
    if let Some(avg) = panel.avg_fraud_amount() {
        lines.push(format!("Average fraud:      {}", avg));
    }
    lines
}

pub async fn history(api: &dyn FraudApi) -> Result<Vec<Transaction>, ApiError> {
    api.transactions().await
}

/// The five-row view the dashboard list shows.
pub fn recent_lines(transactions: &[Transaction]) -> Vec<String> {
    let list = RecentList::from_transactions(transactions);
    if let Some(message) = list.placeholder() {
        return vec![message.to_string()];
    }
    list.items()
        .iter()
        .map(|item| format!("{}  {}  {}", item.title(), item.detail(), item.status_text()))
        .collect()
}

/// Every transaction as a table, newest first, followed by the hourly totals.
pub fn history_lines(transactions: &[Transaction]) -> Vec<String> {
    if transactions.is_empty() {
        return vec![crate::view::recent::EMPTY_MESSAGE.to_string()];
    }

    let mut lines = vec![format!(
        "{:>6}  {:<19}  {:>10}  {:<10}  {:>11}",
        "ID", "Timestamp", "Amount", "Result", "Probability"
    )];
    lines.extend(
        newest_first(transactions, transactions.len()).map(|tx| {
            let verdict = Verdict::from_is_fraud(tx.is_fraud);
            let probability = tx
                .fraud_probability
                .map(|p| format!("{}%", p))
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{:>6}  {:<19}  {:>10}  {:<10}  {:>11}",
                tx.id,
                tx.timestamp,
                format!("${:.2}", tx.amount),
                verdict.to_string(),
                probability
            )
        }),
    );

    let buckets = HourlyBuckets::from_transactions(transactions);
    lines.push(String::new());
    lines.push(format!(
        "Legitimate: {}  Fraud: {}",
        buckets.total_legitimate(),
        buckets.total_fraud()
    ));
    if buckets.skipped() > 0 {
        lines.push(format!(
            "{} transaction(s) had an unreadable timestamp",
            buckets.skipped()
        ));
    }
    lines
}

pub async fn clear_history(api: &dyn FraudApi) -> Result<(), ApiError> {
    api.clear_history().await
}

/// Saves the server URL, keeping the rest of the config file. Returns the
/// environment that was stored.
pub fn set_server(url: &str, config_path: &Path) -> Result<Environment, Box<dyn std::error::Error>> {
    let environment: Environment = url.parse()?;
    let mut config = Config::load_or_default(config_path)?;
    config.api_url = match &environment {
        Environment::Local => None,
        Environment::Custom { api_url } => Some(api_url.clone()),
    };
    config.save(config_path)?;
    Ok(environment)
}

pub fn reset(config_path: &Path) -> Result<(), std::io::Error> {
    Config::clear(config_path)
}
