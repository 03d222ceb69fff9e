//! # grocer-client: HTTP Client and Stateful Components for Grocer
//!
//! Everything that talks to the backend or holds state between user actions
//! lives here, on top of the pure logic in `grocer-core`.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  user action                                                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Presentation (out of scope)                                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  EditSession / ProductSync / grocer_core::filter                        │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  RemoteStore ──── HTTP/JSON ────► backend                               │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  ProductSync replaces snapshot ──► Presentation re-renders              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Connection configuration (one base URL for everything)
//! - [`remote`] - [`RemoteStore`]: reqwest wrapper over the REST endpoints
//! - [`sync`] - [`ProductSync`]: snapshot ownership, mutate-then-reload
//! - [`session`] - [`EditSession`]: create/edit mode state machine
//! - [`settings`] - [`SettingsResolver`]: fetch-or-defaults resolution
//! - [`context`] - [`AppContext`]: dependency-injected session bundle
//! - [`error`] - [`ClientError`]: Fetch / NotFound / Validation

pub mod config;
pub mod context;
pub mod error;
pub mod remote;
pub mod session;
pub mod settings;
pub mod sync;

pub use config::RemoteConfig;
pub use context::AppContext;
pub use error::{ClientError, ClientResult};
pub use remote::RemoteStore;
pub use session::{EditMode, EditSession};
pub use settings::SettingsResolver;
pub use sync::ProductSync;
