//! # Settings Model
//!
//! The nested settings tree the backend serves at `/settings`, with the
//! hard-coded defaults applied whenever the backend is missing, failing, or
//! returns a partial object.
//!
//! ## Settings Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Settings Groups                                 │
//! │                                                                         │
//! │  general        storeName, currency, currencySymbol, timezone,         │
//! │                 dateFormat                                              │
//! │  business       name, address, phone, email, gstNumber, panNumber      │
//! │  notifications  lowStockAlert, outOfStockAlert                         │
//! │  inventory      autoDeductStock, allowNegativeStock                    │
//! │  receipt        headerText, footerText, showGST, autoPrint             │
//! │  payments       enableCash, enableCard, enableUPI, enableCredit,       │
//! │                 creditLimit                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Loaded once at session start, read-only thereafter except for a full
//! reload. Every field carries a serde default so a partial server response
//! degrades to the documented default values rather than a deserialize error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Field Defaults
// =============================================================================
// serde `default = "..."` functions. Kept together so the full default tree
// is readable in one place.

fn default_store_name() -> String {
    "GroceryCRM".to_string()
}
fn default_currency() -> String {
    "INR".to_string()
}
fn default_currency_symbol() -> String {
    "₹".to_string()
}
fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}
fn default_date_format() -> String {
    "DD/MM/YYYY".to_string()
}
fn default_receipt_header() -> String {
    "Thank you for your purchase!".to_string()
}
fn default_receipt_footer() -> String {
    "Please visit again".to_string()
}
fn default_credit_limit() -> i64 {
    50_000
}
fn default_true() -> bool {
    true
}

// =============================================================================
// Settings Groups
// =============================================================================

/// Store-wide display settings. Drives currency and date formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    #[serde(default = "default_store_name")]
    pub store_name: String,
    /// Currency code (ISO 4217).
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol prefixed to formatted amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// `DD/MM/YYYY` or `MM/DD/YYYY`; anything else renders as `DD/MM/YYYY`.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

/// Business identity fields printed on receipts and reports.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gst_number: String,
    #[serde(default)]
    pub pan_number: String,
}

/// Stock alert toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(default = "default_true")]
    pub low_stock_alert: bool,
    #[serde(default = "default_true")]
    pub out_of_stock_alert: bool,
}

/// Inventory behavior toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySettings {
    #[serde(default = "default_true")]
    pub auto_deduct_stock: bool,
    #[serde(default)]
    pub allow_negative_stock: bool,
}

/// Receipt rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSettings {
    #[serde(default = "default_receipt_header")]
    pub header_text: String,
    #[serde(default = "default_receipt_footer")]
    pub footer_text: String,
    #[serde(default = "default_true", rename = "showGST")]
    pub show_gst: bool,
    #[serde(default)]
    pub auto_print: bool,
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
    #[serde(default = "default_true")]
    pub enable_cash: bool,
    #[serde(default = "default_true")]
    pub enable_card: bool,
    #[serde(default = "default_true", rename = "enableUPI")]
    pub enable_upi: bool,
    #[serde(default = "default_true")]
    pub enable_credit: bool,
    #[serde(default = "default_credit_limit")]
    pub credit_limit: i64,
}

// =============================================================================
// Settings
// =============================================================================

/// The full settings tree.
///
/// ## Defaults
/// `Settings::default()` is the documented fallback used whenever the backend
/// cannot be reached or answers with a non-success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub business: BusinessSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub inventory: InventorySettings,
    #[serde(default)]
    pub receipt: ReceiptSettings,
    #[serde(default)]
    pub payments: PaymentSettings,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        GeneralSettings {
            store_name: default_store_name(),
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            timezone: default_timezone(),
            date_format: default_date_format(),
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            low_stock_alert: true,
            out_of_stock_alert: true,
        }
    }
}

impl Default for InventorySettings {
    fn default() -> Self {
        InventorySettings {
            auto_deduct_stock: true,
            allow_negative_stock: false,
        }
    }
}

impl Default for ReceiptSettings {
    fn default() -> Self {
        ReceiptSettings {
            header_text: default_receipt_header(),
            footer_text: default_receipt_footer(),
            show_gst: true,
            auto_print: false,
        }
    }
}

impl Default for PaymentSettings {
    fn default() -> Self {
        PaymentSettings {
            enable_cash: true,
            enable_card: true,
            enable_upi: true,
            enable_credit: true,
            credit_limit: default_credit_limit(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            general: GeneralSettings::default(),
            business: BusinessSettings::default(),
            notifications: NotificationSettings::default(),
            inventory: InventorySettings::default(),
            receipt: ReceiptSettings::default(),
            payments: PaymentSettings::default(),
        }
    }
}

impl Settings {
    /// Looks up a value by dotted path, e.g. `"general.currencySymbol"`.
    ///
    /// Path segments use the wire (camelCase) spelling. Returns `None` when
    /// any segment is absent; never panics.
    pub fn get(&self, path: &str) -> Option<Value> {
        // Settings is plain data, so serialization cannot fail; `.ok()?`
        // keeps the signature total anyway.
        let tree = serde_json::to_value(self).ok()?;
        let mut current = &tree;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        Some(current.clone())
    }

    /// Formats an amount with the configured currency symbol and exactly two
    /// decimal places, e.g. `₹1234.50`.
    pub fn format_currency(&self, amount: f64) -> String {
        let symbol = if self.general.currency_symbol.is_empty() {
            default_currency_symbol()
        } else {
            self.general.currency_symbol.clone()
        };
        format!("{}{:.2}", symbol, amount)
    }

    /// Formats a date per `general.dateFormat`.
    ///
    /// `MM/DD/YYYY` is honored; any other configured value (including the
    /// default) renders as `DD/MM/YYYY`.
    pub fn format_date(&self, date: DateTime<Utc>) -> String {
        if self.general.date_format == "MM/DD/YYYY" {
            date.format("%m/%d/%Y").to_string()
        } else {
            date.format("%d/%m/%Y").to_string()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
