//! Dashboard Controller
//!
//! Owns the refresh protocol: what triggers a refresh, what each refresh
//! fetches, and the recurring statistics timer. Results travel to the view
//! as events; the controller itself holds no view state.

pub mod core;
pub mod prediction;
pub mod refresh;
pub mod scheduler;
pub mod tokens;

use self::core::{EventSender, RefreshContext};
use self::tokens::RequestTokens;
use crate::api::FraudApi;
use crate::api::types::PredictionForm;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

pub struct DashboardController {
    ctx: RefreshContext,
    stats_interval: Duration,
    shutdown_sender: broadcast::Sender<()>,
    timer: Option<JoinHandle<()>>,
}

impl DashboardController {
    pub fn new(
        api: Arc<dyn FraudApi>,
        events: EventSender,
        tokens: RequestTokens,
        stats_interval: Duration,
    ) -> Self {
        let (shutdown_sender, _) = broadcast::channel(1);
        Self {
            ctx: RefreshContext::new(api, events, tokens),
            stats_interval,
            shutdown_sender,
            timer: None,
        }
    }

    /// Initial load: one refresh of each view, then the recurring statistics
    /// timer. Calling it again restarts nothing if the timer is running.
    pub fn start(&mut self) -> Vec<JoinHandle<()>> {
        let handles = refresh::spawn_all(&self.ctx);
        if self.timer.is_none() {
            self.timer = Some(scheduler::spawn_stats_timer(
                self.ctx.clone(),
                self.stats_interval,
                self.shutdown_sender.subscribe(),
            ));
        }
        handles
    }

    /// Submits the form in the background. Its completion reaches the view as
    /// events; the handle resolves once the submission and any refreshes it
    /// triggered have finished.
    pub fn submit(&self, form: PredictionForm) -> JoinHandle<()> {
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            for handle in prediction::submit_prediction(&ctx, form).await {
                let _ = handle.await;
            }
        })
    }

    /// Manual refresh of all three views.
    pub fn refresh_all(&self) -> Vec<JoinHandle<()>> {
        refresh::spawn_all(&self.ctx)
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stops the recurring timer and waits for it to exit.
    pub async fn shutdown(&mut self) {
        let _ = self.shutdown_sender.send(());
        if let Some(timer) = self.timer.take() {
            let _ = timer.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFraudApi;
    use crate::api::types::StatsSnapshot;
    use crate::events::{Event, ViewUpdate};
    use tokio::sync::mpsc;

    fn controller(api: MockFraudApi) -> (DashboardController, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(64);
        let controller = DashboardController::new(
            Arc::new(api),
            EventSender::new(tx),
            RequestTokens::new(),
            Duration::from_secs(30),
        );
        (controller, rx)
    }

    #[tokio::test]
    async fn start_loads_every_view_once_and_arms_timer() {
        let mut api = MockFraudApi::new();
        api.expect_stats()
            .times(1)
            .returning(|| Ok(StatsSnapshot::default()));
        api.expect_transactions().times(2).returning(|| Ok(Vec::new()));
        let (mut controller, mut rx) = controller(api);

        for handle in controller.start() {
            handle.await.unwrap();
        }
        assert!(controller.is_running());

        let mut kinds = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let Some(token) = event.update.and_then(|u| u.token()) {
                kinds.push(token.kind);
            }
        }
        assert_eq!(kinds.len(), 3);

        controller.shutdown().await;
        assert!(!controller.is_running());
    }

    #[tokio::test]
    async fn shutdown_without_start_is_harmless() {
        let (mut controller, _rx) = controller(MockFraudApi::new());
        controller.shutdown().await;
        assert!(!controller.is_running());
    }

    #[tokio::test]
    async fn manual_refresh_updates_list_with_newest_first() {
        use crate::api::types::Transaction;
        let mut api = MockFraudApi::new();
        api.expect_stats()
            .returning(|| Ok(StatsSnapshot::default()));
        api.expect_transactions().returning(|| {
            Ok((1..=7)
                .map(|id| Transaction {
                    id,
                    timestamp: "2024-01-01 12:00:00".to_string(),
                    amount: 1.0,
                    is_fraud: false,
                    fraud_probability: None,
                    result: None,
                })
                .collect())
        });
        let (controller, mut rx) = controller(api);

        for handle in controller.refresh_all() {
            handle.await.unwrap();
        }

        let mut list = None;
        while let Ok(event) = rx.try_recv() {
            if let Some(ViewUpdate::Transactions { list: l, .. }) = event.update {
                list = Some(l);
            }
        }
        let ids: Vec<u64> = list.unwrap().items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    }
}
