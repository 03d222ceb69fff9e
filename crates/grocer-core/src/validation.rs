//! # Validation Module
//!
//! Input validation for product submissions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Edit surface (presentation, out of scope)                    │
//! │  ├── Basic format checks for immediate feedback                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before any network call)                        │
//! │  ├── Collects EVERY violated field into one ValidationError            │
//! │  └── A failure here blocks the submission entirely                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                      │
//! │  └── Schema constraints; rejections surface as fetch errors            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{FieldError, ValidationError};
use crate::types::ProductInput;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product submission before it is sent anywhere.
///
/// ## Rules
/// - `name` must be non-empty after trimming
/// - `price` must be a finite, non-negative number
/// - `stock` must be non-negative
///
/// Violations are collected rather than short-circuited, so the caller can
/// report all of them at once.
///
/// ## Example
/// ```rust
/// use grocer_core::{validate_product_input, ProductInput};
///
/// let input = ProductInput {
///     name: "Milk".to_string(),
///     category: "Dairy".to_string(),
///     price: 2.50,
///     stock: 5,
///     ..Default::default()
/// };
/// assert!(validate_product_input(&input).is_ok());
/// ```
pub fn validate_product_input(input: &ProductInput) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if input.name.trim().is_empty() {
        errors.push(FieldError::NameRequired);
    }

    // NaN and infinities are rejected along with negatives: the wire format
    // is a JSON decimal and none of those serialize as one.
    if !(input.price.is_finite() && input.price >= 0.0) {
        errors.push(FieldError::PriceInvalid);
    }

    if input.stock < 0 {
        errors.push(FieldError::StockNegative);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProductInput {
        ProductInput {
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            price: 2.50,
            stock: 5,
            description: Some("Whole milk 1L".to_string()),
            barcode: None,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_product_input(&valid_input()).is_ok());
    }

    #[test]
    fn test_zero_price_and_stock_allowed() {
        let mut input = valid_input();
        input.price = 0.0;
        input.stock = 0;
        assert!(validate_product_input(&input).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut input = valid_input();
        input.name = "   ".to_string();
        let err = validate_product_input(&input).unwrap_err();
        assert_eq!(err.fields(), vec!["name"]);
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut input = valid_input();
        input.price = -0.01;
        let err = validate_product_input(&input).unwrap_err();
        assert_eq!(err.fields(), vec!["price"]);
    }

    #[test]
    fn test_nan_price_rejected() {
        let mut input = valid_input();
        input.price = f64::NAN;
        let err = validate_product_input(&input).unwrap_err();
        assert_eq!(err.fields(), vec!["price"]);
    }

    #[test]
    fn test_negative_stock_rejected() {
        let mut input = valid_input();
        input.stock = -1;
        let err = validate_product_input(&input).unwrap_err();
        assert_eq!(err.fields(), vec!["stock"]);
    }

    #[test]
    fn test_all_violations_collected() {
        let input = ProductInput {
            name: String::new(),
            category: "Dairy".to_string(),
            price: -1.0,
            stock: -5,
            description: None,
            barcode: None,
        };
        let err = validate_product_input(&input).unwrap_err();
        assert_eq!(err.fields(), vec!["name", "price", "stock"]);
    }
}
