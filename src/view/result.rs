//! Prediction result panel
//!
//! State machine: `Hidden` -> `Loading` -> `Result` | `Error`. The
//! transaction-id label lives beside the panel and is only revealed by a
//! successful prediction and only hidden by a sample fill.

use super::format_number;
use crate::api::types::Prediction;

pub const LOADING_MESSAGE: &str = "Analyzing transaction...";
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error making prediction. Please try again.";

/// Visual class of a result or transaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Verdict {
    Fraud,
    Legitimate,
}

impl Verdict {
    pub fn from_is_fraud(is_fraud: bool) -> Self {
        if is_fraud {
            Verdict::Fraud
        } else {
            Verdict::Legitimate
        }
    }

    /// Warning sign for fraud, check mark otherwise.
    pub fn icon(&self) -> &'static str {
        match self {
            Verdict::Fraud => "⚠",
            Verdict::Legitimate => "✔",
        }
    }
}

/// A successful prediction as shown in the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub prediction: String,
    pub verdict: Verdict,
    pub fraud_probability: f64,
    pub transaction_id: u64,
}

impl PredictionView {
    /// Numeric label of the probability meter, e.g. `3.2%`.
    pub fn probability_label(&self) -> String {
        format!("{}%", format_number(self.fraud_probability))
    }

    /// Fill of the probability meter, 0.0 to 1.0. Not rounded, so the bar
    /// and the label show the same value.
    pub fn meter_ratio(&self) -> f64 {
        self.fraud_probability.clamp(0.0, 100.0) / 100.0
    }

    pub fn transaction_label(&self) -> String {
        format!("Transaction ID: #{}", self.transaction_id)
    }
}

impl From<Prediction> for PredictionView {
    fn from(prediction: Prediction) -> Self {
        Self {
            verdict: Verdict::from_is_fraud(prediction.is_fraud),
            prediction: prediction.prediction,
            fraud_probability: prediction.fraud_probability,
            transaction_id: prediction.transaction_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultPanel {
    #[default]
    Hidden,
    Loading,
    Result(PredictionView),
    Error { message: String },
}

impl ResultPanel {
    /// Panel for a request the server rejected.
    pub fn rejected(error: &str) -> Self {
        ResultPanel::Error {
            message: format!("Error: {}", error),
        }
    }

    /// Panel for a request that never produced a usable response.
    pub fn transport_failure() -> Self {
        ResultPanel::Error {
            message: TRANSPORT_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ResultPanel::Hidden)
    }

    /// Main text line of the panel.
    pub fn text(&self) -> String {
        match self {
            ResultPanel::Hidden => String::new(),
            ResultPanel::Loading => LOADING_MESSAGE.to_string(),
            ResultPanel::Result(view) => view.prediction.clone(),
            ResultPanel::Error { message } => message.clone(),
        }
    }

    /// Visual class; the loading state borrows the legitimate class.
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            ResultPanel::Hidden => None,
            ResultPanel::Loading => Some(Verdict::Legitimate),
            ResultPanel::Result(view) => Some(view.verdict),
            ResultPanel::Error { .. } => Some(Verdict::Fraud),
        }
    }
}

/// The result panel together with the transaction-id label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionPanel {
    pub result: ResultPanel,
    pub transaction_label: Option<String>,
}

impl PredictionPanel {
    pub fn begin(&mut self) {
        self.result = ResultPanel::Loading;
    }

    pub fn finish(&mut self, result: ResultPanel) {
        if let ResultPanel::Result(view) = &result {
            self.transaction_label = Some(view.transaction_label());
        }
        self.result = result;
    }

    /// Hides both the panel and the transaction-id label.
    pub fn hide(&mut self) {
        self.result = ResultPanel::Hidden;
        self.transaction_label = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(is_fraud: bool, probability: f64, id: u64) -> Prediction {
        Prediction {
            prediction: if is_fraud {
                "Fraud Detected".to_string()
            } else {
                "Legitimate".to_string()
            },
            is_fraud,
            fraud_probability: probability,
            transaction_id: id,
        }
    }

    #[test]
    fn legitimate_result_matches_reference_scenario() {
        let mut panel = PredictionPanel::default();
        panel.begin();
        assert_eq!(panel.result.text(), LOADING_MESSAGE);

        panel.finish(ResultPanel::Result(prediction(false, 3.2, 101).into()));
        assert_eq!(panel.result.text(), "Legitimate");
        assert_eq!(panel.result.verdict(), Some(Verdict::Legitimate));
        assert_eq!(
            panel.transaction_label.as_deref(),
            Some("Transaction ID: #101")
        );
        match &panel.result {
            ResultPanel::Result(view) => {
                assert_eq!(view.probability_label(), "3.2%");
                assert_eq!(view.meter_ratio(), 3.2 / 100.0);
            }
            other => panic!("unexpected panel {:?}", other),
        }
    }

    #[test]
    fn fraud_result_always_has_fraud_verdict() {
        for probability in [0.0, 12.5, 50.0, 99.99, 100.0] {
            let view: PredictionView = prediction(true, probability, 1).into();
            assert_eq!(view.verdict, Verdict::Fraud);
            assert_eq!(
                view.probability_label(),
                format!("{}%", format_number(probability))
            );
        }
    }

    #[test]
    fn rejection_shows_server_message_with_fraud_class() {
        let mut panel = PredictionPanel::default();
        panel.begin();
        panel.finish(ResultPanel::rejected("invalid amount"));
        assert_eq!(panel.result.text(), "Error: invalid amount");
        assert_eq!(panel.result.verdict(), Some(Verdict::Fraud));
        assert_eq!(panel.transaction_label, None);
    }

    #[test]
    fn transaction_label_survives_later_errors_until_hidden() {
        let mut panel = PredictionPanel::default();
        panel.finish(ResultPanel::Result(prediction(false, 1.0, 7).into()));
        panel.begin();
        panel.finish(ResultPanel::transport_failure());
        assert_eq!(panel.transaction_label.as_deref(), Some("Transaction ID: #7"));
        assert_eq!(panel.result.text(), TRANSPORT_ERROR_MESSAGE);

        panel.hide();
        assert!(!panel.result.is_visible());
        assert_eq!(panel.transaction_label, None);
    }

    #[test]
    fn meter_is_clamped() {
        let view: PredictionView = prediction(true, 140.0, 2).into();
        assert_eq!(view.meter_ratio(), 1.0);
        let view: PredictionView = prediction(false, -3.0, 2).into();
        assert_eq!(view.meter_ratio(), 0.0);
    }

    #[test]
    fn small_probabilities_keep_a_visible_meter() {
        for probability in [0.4, 3.2, 47.25, 99.99] {
            let view: PredictionView = prediction(false, probability, 3).into();
            assert_eq!(view.meter_ratio(), probability / 100.0);
            assert!(view.meter_ratio() > 0.0);
        }
    }
}
