//! # Domain Types
//!
//! Core domain types used throughout Grocer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductInput   │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (server)    │   │  name           │   │  id (server)    │       │
//! │  │  name           │   │  category       │   │  product (ref)  │       │
//! │  │  price / stock  │   │  price / stock  │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   StockBand     │   │ FilterCriteria  │   │  StockStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Any            │   │  search_term    │   │  OutOfStock     │       │
//! │  │  Low    (<10)   │   │  category       │   │  Low            │       │
//! │  │  Medium (10-50) │   │  stock_band     │   │  InStock        │       │
//! │  │  High   (>50)   │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! `Product::id` is assigned by the backend and immutable once set. A product
//! has an id if and only if the backend has persisted it - which is enforced
//! by construction: user-supplied data is always a [`ProductInput`] (no id),
//! and only backend responses deserialize into [`Product`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product record as persisted by the backend.
///
/// ## Wire Format
/// The backend is Mongo-style and serializes the identity as `_id`; the
/// `alias` below accepts either spelling on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier - assigned by the backend, immutable once set.
    #[serde(alias = "_id")]
    pub id: String,

    /// Display name shown in tables and on the edit surface.
    pub name: String,

    /// Category - an open set of strings, not an enum.
    pub category: String,

    /// Unit price. The backend wire format is a plain JSON decimal.
    pub price: f64,

    /// Current stock level.
    pub stock: i64,

    /// Optional long description.
    #[serde(default)]
    pub description: Option<String>,

    /// Optional barcode (EAN-13, UPC-A, etc.).
    #[serde(default)]
    pub barcode: Option<String>,
}

impl Product {
    /// Classifies the stock level for display badges.
    pub fn stock_status(&self) -> StockStatus {
        if self.stock == 0 {
            StockStatus::OutOfStock
        } else if self.stock < 10 {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }
}

/// Coarse stock classification used for table badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Low,
    InStock,
}

// =============================================================================
// Product Input
// =============================================================================

/// The user-supplied subset of product fields for create/update requests.
///
/// Excludes the server-assigned `id` - the backend generates identity and any
/// derived fields, and the snapshot is re-fetched after every mutation rather
/// than patched locally.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
}

// =============================================================================
// Sale
// =============================================================================

/// A sale record returned by the backend.
///
/// Sales are consumed for display only; the client never edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(alias = "_id")]
    pub id: String,

    /// Product reference. The backend returns either the raw product id or a
    /// populated product object depending on the endpoint, so this stays an
    /// untyped JSON value.
    pub product: serde_json::Value,

    /// Quantity sold.
    pub quantity: i64,

    /// Server timestamp for the sale.
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// User-supplied fields for recording a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleInput {
    /// Product id being sold.
    pub product: String,
    /// Quantity sold.
    pub quantity: i64,
}

// =============================================================================
// Filtering
// =============================================================================

/// Coarse inventory quantity band used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockBand {
    /// No stock filtering.
    #[default]
    Any,
    /// Fewer than 10 units.
    Low,
    /// Between 10 and 50 units inclusive.
    Medium,
    /// More than 50 units.
    High,
}

impl StockBand {
    /// Whether a stock level falls inside this band.
    pub fn matches(&self, stock: i64) -> bool {
        match self {
            StockBand::Any => true,
            StockBand::Low => stock < 10,
            StockBand::Medium => (10..=50).contains(&stock),
            StockBand::High => stock > 50,
        }
    }
}

/// Active filter criteria over a product snapshot.
///
/// Stateless: rebuilt from UI input on every query. The default value filters
/// nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against name and description.
    /// Empty means no search filtering.
    #[serde(default)]
    pub search_term: String,

    /// Exact category match. `None` (or an empty string) means no filtering.
    #[serde(default)]
    pub category: Option<String>,

    /// Stock band predicate.
    #[serde(default)]
    pub stock_band: StockBand,
}

// =============================================================================
// Unit Tests
// =============================================================================
