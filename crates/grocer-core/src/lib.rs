//! # grocer-core: Pure Domain Logic for Grocer
//!
//! This crate is the **heart** of Grocer. It contains all domain logic as
//! pure functions and plain types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Grocer Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (tables, modals, toasts)              │   │
//! │  │                        — out of scope —                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  grocer-client (HTTP + state)                   │   │
//! │  │     RemoteStore, ProductSync, EditSession, SettingsResolver    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  filter   │  │ settings  │  │ validation│  │   │
//! │  │   │  Product  │  │  apply()  │  │ defaults  │  │   rules   │  │   │
//! │  │   │   Sale    │  │  3-clause │  │ get(path) │  │  collects │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, FilterCriteria, StockBand)
//! - [`filter`] - Pure, order-preserving snapshot filtering
//! - [`settings`] - Settings tree, defaults, currency/date formatting
//! - [`validation`] - Product input validation
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: network and file system access is FORBIDDEN here
//! 3. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod settings;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use grocer_core::Product` instead of
// `use grocer_core::types::Product`

pub use error::{FieldError, ValidationError};
pub use settings::Settings;
pub use types::{
    FilterCriteria, Product, ProductInput, Sale, SaleInput, StockBand, StockStatus,
};
pub use validation::validate_product_input;
