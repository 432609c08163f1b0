use std::env;

/// Configuration loaded from environment variables
pub struct Config {
    /// Trailing window length in seconds for the co-occurrence graph
    pub window_secs: i64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// WINDOW_SECS overrides the trailing window length (default: 60).
    pub fn from_env() -> Self {
        let window_secs = env::var("WINDOW_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        Self { window_secs }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { window_secs: 60 }
    }
}
