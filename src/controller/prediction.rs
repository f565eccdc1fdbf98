//! Prediction submission
//!
//! Drives the result panel through Loading into Result or Error and, only
//! after a successful classification, starts the three downstream refreshes.

use super::core::RefreshContext;
use super::refresh;
use super::tokens::RefreshKind;
use crate::api::error::ApiError;
use crate::api::types::{PredictionForm, PredictionOutcome};
use crate::events::{EventType, Source, ViewUpdate};
use crate::logging::LogLevel;
use crate::view::ResultPanel;
use crate::view::result::PredictionView;
use tokio::task::JoinHandle;

/// Submits the form and reports every panel transition. Returns the handles
/// of the refreshes it started; the list is empty unless the prediction
/// succeeded.
pub async fn submit_prediction(ctx: &RefreshContext, form: PredictionForm) -> Vec<JoinHandle<()>> {
    let token = ctx.tokens.issue(RefreshKind::Prediction);
    ctx.events
        .send_update(
            Source::Prediction,
            format!("Analyzing transaction of {}...", form.amount),
            EventType::StateChange,
            LogLevel::Info,
            ViewUpdate::PredictionStarted { token },
        )
        .await;

    let outcome = ctx.api.predict(form).await.and_then(|response| {
        response
            .outcome()
            .ok_or_else(|| ApiError::Malformed("prediction response is incomplete".to_string()))
    });

    match outcome {
        Ok(PredictionOutcome::Accepted(prediction)) => {
            let view = PredictionView::from(prediction);
            ctx.events
                .send_update(
                    Source::Prediction,
                    format!(
                        "Transaction #{}: {} ({})",
                        view.transaction_id,
                        view.prediction,
                        view.probability_label()
                    ),
                    EventType::Success,
                    LogLevel::Info,
                    ViewUpdate::PredictionFinished {
                        token,
                        panel: ResultPanel::Result(view),
                    },
                )
                .await;
            refresh::spawn_all(ctx)
        }
        Ok(PredictionOutcome::Rejected { error }) => {
            ctx.events
                .send_update(
                    Source::Prediction,
                    format!("Prediction rejected: {}", error),
                    EventType::Error,
                    LogLevel::Warn,
                    ViewUpdate::PredictionFinished {
                        token,
                        panel: ResultPanel::rejected(&error),
                    },
                )
                .await;
            Vec::new()
        }
        Err(e) => {
            let log_level = ctx.classifier.classify(&e);
            ctx.events
                .send_update(
                    Source::Prediction,
                    format!("Prediction request failed: {}", e),
                    EventType::Error,
                    log_level,
                    ViewUpdate::PredictionFinished {
                        token,
                        panel: ResultPanel::transport_failure(),
                    },
                )
                .await;
            Vec::new()
        }
    }
}
