//! # caja-core: Pure Business Logic for Caja POS
//!
//! This crate is the **heart** of Caja POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Caja POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Host UI (out of scope)                     │   │
//! │  │    Inventory ──► Billing ──► Staff ──► History ──► Dashboard   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    caja-sales (Services)                        │   │
//! │  │    issue_document, punch, lookup_customer, dashboard data      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ caja-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │ validation│  │ matching  │                  │   │
//! │  │   │  Product  │  │   rules   │  │  product  │                  │   │
//! │  │   │ Employee  │  │  checks   │  │  lookup   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO CLOCK • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  caja-store (Persistence Layer)                 │   │
//! │  │          Preference file, store handle, repositories            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Employee, SalesDocument, etc.)
//! - [`error`] - Validation error types
//! - [`validation`] - Input validation rules
//! - [`matching`] - Product lookup rules for stock updates
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Store, network, file system and clock access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use caja_core::validation::validate_dni;
//! use caja_core::EmployeeStatus;
//!
//! // A Peruvian DNI is exactly eight digits
//! assert!(validate_dni("45879632").is_ok());
//! assert!(validate_dni("1234").is_err());
//!
//! // Staff start the day unclocked
//! assert_eq!(EmployeeStatus::default(), EmployeeStatus::Absent);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod matching;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use caja_core::Product` instead of
// `use caja_core::types::Product`

pub use error::ValidationError;
pub use matching::match_product;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Length of a Peruvian DNI (national identity number), in digits.
///
/// Customer ids on generated documents are DNIs; the registry lookup and
/// every billing validation use this length.
pub const DNI_LENGTH: usize = 8;

/// Maximum length accepted for free-text name fields (customer, product).
///
/// ## Business Reason
/// Keeps pathological input out of the preference file; real names and
/// product descriptions are far shorter.
pub const MAX_NAME_LENGTH: usize = 200;
