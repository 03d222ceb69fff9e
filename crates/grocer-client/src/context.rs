//! # Application Context
//!
//! One explicitly constructed bundle of everything the presentation layer
//! talks to. Replaces global mutable module state with dependency injection:
//! created once at session start, dropped at session end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         AppContext                                      │
//! │                                                                         │
//! │   remote: Arc<RemoteStore>   shared HTTP client                        │
//! │   products: ProductSync      snapshot + mutate-then-reload             │
//! │   session: EditSession       create/edit mode                          │
//! │   settings: SettingsResolver resolved once, read-only after            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use crate::config::RemoteConfig;
use crate::error::ClientResult;
use crate::remote::RemoteStore;
use crate::session::EditSession;
use crate::settings::SettingsResolver;
use crate::sync::ProductSync;

/// Everything a client session needs, wired together.
#[derive(Debug)]
pub struct AppContext {
    /// Shared HTTP client; also serves sales and dashboard calls directly.
    pub remote: Arc<RemoteStore>,
    /// Product snapshot and mutations.
    pub products: ProductSync,
    /// Create/edit state for the record being edited.
    pub session: EditSession,
    /// Resolved settings (backend values or defaults).
    pub settings: SettingsResolver,
}

impl AppContext {
    /// Builds a context and resolves settings.
    ///
    /// Settings resolution never fails (it degrades to defaults with a
    /// warning); the product snapshot starts empty - call
    /// `products.load_all()` and report its error to the user, mirroring the
    /// initial page load.
    pub async fn init(config: RemoteConfig) -> ClientResult<Self> {
        let remote = Arc::new(RemoteStore::new(&config)?);
        let settings = SettingsResolver::load_shared(&remote).await;

        Ok(AppContext {
            products: ProductSync::new(Arc::clone(&remote)),
            session: EditSession::new(),
            settings,
            remote,
        })
    }
}
