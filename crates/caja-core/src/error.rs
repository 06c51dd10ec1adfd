//! # Error Types
//!
//! Validation errors for caja-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  caja-core errors (this file)                                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  caja-store errors (separate crate)                                    │
//! │  └── StoreError       - Preference-file operation failures             │
//! │                                                                         │
//! │  caja-sales errors (separate crate)                                    │
//! │  └── SalesError       - Wraps the above + domain errors;               │
//! │                         what the host UI sees                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, field name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs; the host surfaces
/// them as transient notices and the write simply never happens.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Field value must have an exact length.
    #[error("{field} must be exactly {expected} digits")]
    ExactLength { field: String, expected: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (non-digit DNI, unparseable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer name".to_string(),
        };
        assert_eq!(err.to_string(), "customer name is required");

        let err = ValidationError::ExactLength {
            field: "dni".to_string(),
            expected: 8,
        };
        assert_eq!(err.to_string(), "dni must be exactly 8 digits");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "price has invalid format: not a number");
    }
}
