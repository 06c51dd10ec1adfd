//! # Error Types
//!
//! Errors surfaced to the host by the sales services.
//!
//! Validation failures and store failures are wrapped rather than redefined;
//! the two domain variants here are the lookups only this crate performs.

use thiserror::Error;

use caja_core::ValidationError;
use caja_store::StoreError;

/// Errors returned by the sales services.
#[derive(Debug, Error)]
pub enum SalesError {
    /// User input failed validation. The write never happened.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The customer registry has no record for this DNI.
    #[error("customer {dni} is not in the registry")]
    CustomerNotFound { dni: String },

    /// Attendance operation targeted an id missing from the roster.
    #[error("employee {id} is not in the roster")]
    EmployeeNotFound { id: u32 },

    /// The preference store failed underneath the service.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for Results with SalesError.
pub type SalesResult<T> = Result<T, SalesError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SalesError::CustomerNotFound {
            dni: "45879632".to_string(),
        };
        assert_eq!(err.to_string(), "customer 45879632 is not in the registry");

        let err = SalesError::EmployeeNotFound { id: 9 };
        assert_eq!(err.to_string(), "employee 9 is not in the roster");
    }

    #[test]
    fn test_validation_wraps_with_context() {
        let err: SalesError = ValidationError::Required {
            field: "product description".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "invalid input: product description is required");
    }
}
