//! # Settings Resolver
//!
//! Loads the settings tree from the backend, degrading to the hard-coded
//! defaults on any failure.
//!
//! ## Degrade Gracefully
//! A missing or broken settings endpoint must never take the client down -
//! formatting falls back to the documented defaults and the fallback is
//! logged at WARNING level, not error. This is the single place in the
//! system where a fetch failure is intentionally swallowed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use grocer_core::Settings;
use serde_json::Value;
use tracing::{info, warn};

use crate::remote::RemoteStore;

/// Resolved settings plus the formatting helpers driven by them.
#[derive(Debug, Clone)]
pub struct SettingsResolver {
    settings: Settings,
}

impl SettingsResolver {
    /// Fetches settings from the backend; on ANY failure (transport error or
    /// non-success status) falls back to [`Settings::default`].
    pub async fn load(remote: &RemoteStore) -> Self {
        let settings = match remote.fetch_settings().await {
            Ok(settings) => {
                info!(store = %settings.general.store_name, "settings loaded");
                settings
            }
            Err(err) => {
                warn!(error = %err, "settings unavailable, using defaults");
                Settings::default()
            }
        };

        SettingsResolver { settings }
    }

    /// Convenience for [`Self::load`] with a shared store.
    pub async fn load_shared(remote: &Arc<RemoteStore>) -> Self {
        Self::load(remote.as_ref()).await
    }

    /// A resolver over the default tree, for contexts with no backend at all.
    pub fn defaults() -> Self {
        SettingsResolver {
            settings: Settings::default(),
        }
    }

    /// The resolved settings tree.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dotted-path lookup, e.g. `get("general.currencySymbol")`.
    /// `None` when any segment is absent; never panics.
    pub fn get(&self, path: &str) -> Option<Value> {
        self.settings.get(path)
    }

    /// Formats an amount per the resolved currency symbol: `₹1234.50`.
    pub fn format_currency(&self, amount: f64) -> String {
        self.settings.format_currency(amount)
    }

    /// Formats a date per the resolved `general.dateFormat`.
    pub fn format_date(&self, date: DateTime<Utc>) -> String {
        self.settings.format_date(date)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
// The fetch-vs-fallback split is covered by the integration tests; these
// cover the delegation surface over the default tree.
