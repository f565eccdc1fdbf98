//! Core controller utilities

use super::tokens::RequestTokens;
use crate::api::FraudApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType, Source, ViewUpdate};
use crate::logging::LogLevel;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Common event sending utilities for controller tasks
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event. Every event is mirrored to the `log` facade.
    pub async fn send_event(&self, event: Event) {
        log::log!(
            log::Level::from(event.log_level),
            "{}: {}",
            event.source,
            event.msg
        );
        let _ = self.sender.send(event).await;
    }

    pub async fn send(
        &self,
        source: Source,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::new(source, message, event_type, log_level))
            .await;
    }

    pub async fn send_update(
        &self,
        source: Source,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
        update: ViewUpdate,
    ) {
        self.send_event(Event::new(source, message, event_type, log_level).with_update(update))
            .await;
    }
}

/// Everything a spawned refresh or submission needs. Cheap to clone.
#[derive(Clone)]
pub struct RefreshContext {
    pub api: Arc<dyn FraudApi>,
    pub events: EventSender,
    pub tokens: RequestTokens,
    pub classifier: ErrorClassifier,
}

impl RefreshContext {
    pub fn new(api: Arc<dyn FraudApi>, events: EventSender, tokens: RequestTokens) -> Self {
        Self {
            api,
            events,
            tokens,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Reports a failed request at the level its error class warrants.
    pub async fn report_failure(&self, source: Source, what: &str, error: &ApiError) {
        let log_level = self.classifier.classify(error);
        self.events
            .send(
                source,
                format!("{}: {}", what, error),
                EventType::Error,
                log_level,
            )
            .await;
    }
}
