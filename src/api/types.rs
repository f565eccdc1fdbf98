//! Wire types exchanged with the prediction service.

use serde::{Deserialize, Serialize};

/// A stored transaction as returned by `/api/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub timestamp: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    pub is_fraud: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Raw body of a `/predict` response.
///
/// The server always answers with `success`; the remaining fields depend on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub is_fraud: Option<bool>,
    #[serde(default)]
    pub fraud_probability: Option<f64>,
    #[serde(default)]
    pub transaction_id: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A classified transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub prediction: String,
    pub is_fraud: bool,
    /// Percentage points, 0 to 100.
    pub fraud_probability: f64,
    pub transaction_id: u64,
}

/// What a well-formed `/predict` response means.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Accepted(Prediction),
    /// The server refused the submission and said why.
    Rejected { error: String },
}

impl PredictionResponse {
    /// Interprets the response. Returns `None` when `success` is true but a
    /// field the result panel needs is missing.
    pub fn outcome(self) -> Option<PredictionOutcome> {
        if !self.success {
            return Some(PredictionOutcome::Rejected {
                error: self.error.unwrap_or_else(|| "Unknown error".to_string()),
            });
        }
        Some(PredictionOutcome::Accepted(Prediction {
            prediction: self.prediction?,
            is_fraud: self.is_fraud?,
            fraud_probability: self.fraud_probability?,
            transaction_id: self.transaction_id?,
        }))
    }
}

/// Snapshot returned by `/api/stats`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total: u64,
    pub legitimate_count: u64,
    pub fraud_count: u64,
    pub fraud_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_fraud_amount: Option<f64>,
}

/// The transaction form as submitted to `/predict`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionForm {
    /// Raw text of the amount field; the server validates it.
    pub amount: String,
}

impl PredictionForm {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
        }
    }

    /// Form fields in submission order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("Amount", self.amount.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_transaction_record() {
        let json = r#"{"id":7,"timestamp":"2024-03-01 14:05:09","Amount":250.0,
            "is_fraud":false,"fraud_probability":3.2,"result":"Transaction is Legitimate"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, 7);
        assert_eq!(tx.amount, 250.0);
        assert_eq!(tx.fraud_probability, Some(3.2));
    }

    #[test]
    fn decodes_minimal_transaction_record() {
        let json = r#"{"id":1,"timestamp":"2024-03-01T03:00:00","Amount":12.5,"is_fraud":true}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.is_fraud);
        assert_eq!(tx.result, None);
    }

    #[test]
    fn accepted_outcome_carries_all_fields() {
        let json = r#"{"success":true,"prediction":"Legitimate","is_fraud":false,
            "fraud_probability":3.2,"transaction_id":101}"#;
        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.outcome(),
            Some(PredictionOutcome::Accepted(Prediction {
                prediction: "Legitimate".to_string(),
                is_fraud: false,
                fraud_probability: 3.2,
                transaction_id: 101,
            }))
        );
    }

    #[test]
    fn rejected_outcome_keeps_server_message() {
        let json = r#"{"success":false,"error":"invalid amount"}"#;
        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.outcome(),
            Some(PredictionOutcome::Rejected {
                error: "invalid amount".to_string()
            })
        );
    }

    #[test]
    fn success_without_probability_is_malformed() {
        let json = r#"{"success":true,"prediction":"Legitimate","is_fraud":false,"transaction_id":3}"#;
        let response: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.outcome(), None);
    }

    #[test]
    fn stats_optional_averages_default_to_none() {
        let json = r#"{"total":10,"legitimate_count":8,"fraud_count":2,"fraud_percentage":20.0}"#;
        let stats: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total, stats.legitimate_count + stats.fraud_count);
        assert_eq!(stats.avg_amount, None);
    }
}
