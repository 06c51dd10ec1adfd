//! # Validation Module
//!
//! Input validation utilities for Caja POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host UI                                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Services (caja-sales)                                        │
//! │  └── THIS MODULE: field rules before any write happens                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Types                                                        │
//! │  ├── enums for status and document kind                                │
//! │  └── unsigned stock (cannot go below zero)                             │
//! │                                                                         │
//! │  A failed check surfaces as a notice; the write is never invoked.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use caja_core::validation::{validate_dni, parse_price};
//!
//! // Validate the customer id before the registry lookup
//! validate_dni("45879632").unwrap();
//!
//! // Parse the price field of the billing form
//! let price = parse_price("2500.00").unwrap();
//! assert_eq!(price, 2500.0);
//! ```

use crate::error::ValidationError;
use crate::{DNI_LENGTH, MAX_NAME_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identity Validators
// =============================================================================

/// Validates a customer DNI.
///
/// ## Rules
/// - Must not be empty
/// - Must be exactly 8 characters
/// - Must contain only ASCII digits
///
/// ## Example
/// ```rust
/// use caja_core::validation::validate_dni;
///
/// assert!(validate_dni("45879632").is_ok());
/// assert!(validate_dni("").is_err());
/// assert!(validate_dni("4587963").is_err());
/// assert!(validate_dni("4587963A").is_err());
/// ```
pub fn validate_dni(dni: &str) -> ValidationResult<()> {
    let dni = dni.trim();

    if dni.is_empty() {
        return Err(ValidationError::Required {
            field: "dni".to_string(),
        });
    }

    if dni.chars().count() != DNI_LENGTH {
        return Err(ValidationError::ExactLength {
            field: "dni".to_string(),
            expected: DNI_LENGTH,
        });
    }

    if !dni.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "dni".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_name_field("customer name", name)
}

/// Validates the product description typed on the billing form.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_desc(desc: &str) -> ValidationResult<()> {
    validate_name_field("product", desc)
}

fn validate_name_field(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sale price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be strictly positive (a document for S/ 0 makes no sale)
///
/// ## Example
/// ```rust
/// use caja_core::validation::validate_price;
///
/// assert!(validate_price(2500.0).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(-10.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "not a finite number".to_string(),
        });
    }

    if price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Parses the raw price text of the billing form.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a decimal number
/// - Must pass [`validate_price`]
///
/// ## Returns
/// The parsed price in soles.
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let price: f64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: "not a number".to_string(),
    })?;

    validate_price(price)?;
    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dni() {
        // Valid DNIs
        assert!(validate_dni("45879632").is_ok());
        assert!(validate_dni("00000001").is_ok());
        assert!(validate_dni("  45879632  ").is_ok());

        // Invalid DNIs
        assert!(validate_dni("").is_err());
        assert!(validate_dni("   ").is_err());
        assert!(validate_dni("1234567").is_err());
        assert!(validate_dni("123456789").is_err());
        assert!(validate_dni("4587963A").is_err());
    }

    #[test]
    fn test_dni_error_variants() {
        assert!(matches!(
            validate_dni(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_dni("123"),
            Err(ValidationError::ExactLength { expected: 8, .. })
        ));
        assert!(matches!(
            validate_dni("12a45678"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Juan Carlos Pérez Rodríguez").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_product_desc() {
        assert!(validate_product_desc("Refrigeradora LG").is_ok());
        assert!(validate_product_desc("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(2500.0).is_ok());
        assert!(validate_price(0.01).is_ok());

        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-100.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("2500").unwrap(), 2500.0);
        assert_eq!(parse_price(" 180.50 ").unwrap(), 180.5);

        assert!(matches!(
            parse_price(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_price("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
    }
}
