pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between the controller and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // VIEW CONFIGURATION
    // =============================================================================

    /// Number of transactions shown in the recent-transactions list
    pub const RECENT_TRANSACTIONS_LIMIT: usize = 5;

    /// Number of hourly buckets in the transactions chart
    pub const HOURS_PER_DAY: usize = 24;

    /// Sample-fill amount range, inclusive on both ends
    pub mod sample {
        pub const MIN_AMOUNT: f64 = 1.0;
        pub const MAX_AMOUNT: f64 = 1000.0;
        /// Decimal places kept on generated amounts
        pub const DECIMALS: i32 = 2;
    }

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Polling configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between statistics-only refreshes (seconds)
        pub const STATS_REFRESH_INTERVAL_SECS: u64 = 30;

        /// Helper function to get the statistics refresh interval
        pub const fn stats_refresh_interval() -> Duration {
            Duration::from_secs(STATS_REFRESH_INTERVAL_SECS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client configuration
    pub mod http {
        use std::time::Duration;

        /// Connect timeout for API requests (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Total request timeout for API requests (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
