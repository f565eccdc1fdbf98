//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::Event;
use std::error::Error;
use tokio::sync::broadcast;

/// Line printed for an event, if it should be shown at all. Stdout is the
/// only sink in headless mode; no `log` backend is installed.
fn headless_line(event: &Event) -> Option<String> {
    event.should_display().then(|| event.to_string())
}

/// Runs the controller without a terminal UI, printing every displayable
/// event until Ctrl+C.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment.api_url());

    // Trigger shutdown on Ctrl+C
    let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender.send(());
        }
    });

    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if let Some(line) = headless_line(&event) {
                    println!("{}", line);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.controller.shutdown().await;
    print_session_exit_success();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventType, Source};
    use crate::logging::LogLevel;

    #[test]
    fn each_event_yields_at_most_one_line() {
        let failure = Event::new(
            Source::Stats,
            "Failed to load statistics".to_string(),
            EventType::Error,
            LogLevel::Error,
        );
        let line = headless_line(&failure).unwrap();
        assert_eq!(line, failure.to_string());
        assert_eq!(line.matches("Failed to load statistics").count(), 1);
    }

    #[test]
    fn state_changes_are_not_printed() {
        let loading = Event::new(
            Source::Prediction,
            "Analyzing transaction".to_string(),
            EventType::StateChange,
            LogLevel::Info,
        );
        assert_eq!(headless_line(&loading), None);
    }
}
