//! # Client Configuration
//!
//! Connection settings for the backend.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Explicit construction by the embedding application
//! 2. Environment variables (`GROCER_*`)
//! 3. Defaults (this file)
//!
//! ## One Base URL
//! Every endpoint - products, sales, settings, dashboard - resolves against
//! the same `base_url`. The settings endpoint is deliberately NOT special-
//! cased to a separate address.

use std::time::Duration;

/// Connection configuration for [`crate::remote::RemoteStore`].
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the backend API, without a trailing slash.
    /// e.g. `http://localhost:5000/api`
    pub base_url: String,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Per-request timeout. There is no cancellation beyond this: a slow
    /// request simply delays the eventual snapshot update.
    pub request_timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            base_url: "http://localhost:5000/api".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl RemoteConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GROCER_API_URL`: Override the base URL
    /// - `GROCER_API_TIMEOUT_SECS`: Override the per-request timeout
    pub fn from_env() -> Self {
        let mut config = RemoteConfig::default();

        if let Ok(url) = std::env::var("GROCER_API_URL") {
            config.base_url = url;
        }

        if let Ok(timeout) = std::env::var("GROCER_API_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config.request_timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Creates a config pointing at the given base URL, trimming any
    /// trailing slash so endpoint paths join cleanly.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        RemoteConfig {
            base_url: url,
            ..RemoteConfig::default()
        }
    }
}
