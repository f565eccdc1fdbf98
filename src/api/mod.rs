use crate::api::error::ApiError;
use crate::api::types::{PredictionForm, PredictionResponse, StatsSnapshot, Transaction};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::FraudApiClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FraudApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Submits a transaction form for classification.
    async fn predict(&self, form: PredictionForm) -> Result<PredictionResponse, ApiError>;

    /// Fetches every stored transaction, oldest first.
    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError>;

    /// Fetches the aggregate statistics snapshot.
    async fn stats(&self) -> Result<StatsSnapshot, ApiError>;

    /// Deletes the stored transaction history.
    async fn clear_history(&self) -> Result<(), ApiError>;
}
