//! Session setup and initialization

use crate::api::{FraudApi, FraudApiClient};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::controller::DashboardController;
use crate::controller::core::EventSender;
use crate::controller::tokens::RequestTokens;
use crate::environment::Environment;
use crate::events::Event;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for controller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Running controller; the initial load is already in flight
    pub controller: DashboardController,
    /// Shared with the view so it can drop superseded completions
    pub tokens: RequestTokens,
    /// The service being monitored
    pub environment: Environment,
    /// Interval of the recurring statistics refresh
    pub stats_interval: Duration,
}

/// Connects to the fraud API and starts the dashboard controller: one load of
/// every view plus the recurring statistics timer.
pub fn setup_session(
    environment: Environment,
    stats_interval: Duration,
) -> Result<SessionData, Box<dyn Error>> {
    let client = FraudApiClient::new(environment.clone())?;
    Ok(start_session(Arc::new(client), stats_interval))
}

/// Starts a session on an already built API. Must run inside a tokio runtime.
pub fn start_session(api: Arc<dyn FraudApi>, stats_interval: Duration) -> SessionData {
    let environment = api.environment().clone();
    let (sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let tokens = RequestTokens::new();

    let mut controller = DashboardController::new(
        api,
        EventSender::new(sender),
        tokens.clone(),
        stats_interval,
    );
    // The initial refreshes report through events
    let _ = controller.start();

    SessionData {
        event_receiver,
        controller,
        tokens,
        environment,
        stats_interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFraudApi;
    use crate::api::types::StatsSnapshot;
    use crate::events::ViewUpdate;

    #[tokio::test]
    async fn session_starts_with_initial_load() {
        let mut api = MockFraudApi::new();
        api.expect_environment().return_const(Environment::Local);
        api.expect_stats()
            .returning(|| Ok(StatsSnapshot::default()));
        api.expect_transactions().returning(|| Ok(Vec::new()));

        let mut session = start_session(Arc::new(api), Duration::from_secs(30));
        assert_eq!(session.environment, Environment::Local);
        assert!(session.controller.is_running());

        let mut updates = 0;
        while updates < 3 {
            let event = session.event_receiver.recv().await.unwrap();
            if matches!(
                event.update,
                Some(ViewUpdate::Stats { .. })
                    | Some(ViewUpdate::Transactions { .. })
                    | Some(ViewUpdate::Chart { .. })
            ) {
                updates += 1;
            }
        }
        session.controller.shutdown().await;
    }
}
