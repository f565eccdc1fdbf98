use crate::api::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify an API error and determine the log level it is reported at
    pub fn classify(&self, error: &ApiError) -> LogLevel {
        match error {
            // Rate limiting - low priority
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Route missing or misrouted - the URL is probably wrong
            ApiError::Http { status, .. } if *status == 404 => LogLevel::Error,

            // Contract violations - the server is not the one we expect
            ApiError::Decode(_) | ApiError::Malformed(_) => LogLevel::Error,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,

            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
