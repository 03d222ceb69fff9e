//! # Error Types
//!
//! Domain-specific error types for grocer-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never bare Strings
//! 3. A validation failure carries EVERY violated field, not just the first -
//!    the edit surface highlights them all at once

use thiserror::Error;

// =============================================================================
// Field Error
// =============================================================================

/// A single rejected field on a [`crate::ProductInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Name is empty or whitespace-only.
    #[error("name must not be empty")]
    NameRequired,

    /// Price is negative or not a finite number.
    #[error("price must be a non-negative number")]
    PriceInvalid,

    /// Stock is negative.
    #[error("stock must be a non-negative integer")]
    StockNegative,
}

impl FieldError {
    /// The input field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "name",
            FieldError::PriceInvalid => "price",
            FieldError::StockNegative => "stock",
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failure, listing all violated fields.
///
/// Produced before any network call; a failed validation performs no partial
/// state change anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", describe(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Creates a validation error from a non-empty list of field errors.
    pub fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty(), "ValidationError with no violations");
        ValidationError { errors }
    }

    /// The individual field violations.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Names of the violated fields, in input order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(FieldError::field).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::NameRequired.to_string(), "name must not be empty");
        assert_eq!(FieldError::NameRequired.field(), "name");
        assert_eq!(FieldError::PriceInvalid.field(), "price");
        assert_eq!(FieldError::StockNegative.field(), "stock");
    }

    #[test]
    fn test_validation_error_lists_every_field() {
        let err = ValidationError::new(vec![FieldError::NameRequired, FieldError::StockNegative]);
        assert_eq!(err.fields(), vec!["name", "stock"]);
        assert_eq!(
            err.to_string(),
            "validation failed: name must not be empty; stock must be a non-negative integer"
        );
    }
}
