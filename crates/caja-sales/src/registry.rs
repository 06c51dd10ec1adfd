//! # Customer Registry
//!
//! DNI-to-name lookup behind a trait, so the billing flow does not care
//! whether names come from a national registry client or the built-in
//! simulation.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Customer Lookup                                  │
//! │                                                                         │
//! │  Cashier types DNI ──► BillingService::lookup_customer                 │
//! │                              │                                          │
//! │                              │ validate_dni (8 digits)                  │
//! │                              ▼                                          │
//! │                    dyn CustomerRegistry::lookup                         │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                          │
//! │              ▼                               ▼                          │
//! │   SimulatedCustomerRegistry        (future RENIEC client)               │
//! │   deterministic name per DNI                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// A resolved customer record.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    /// National identity number (DNI), eight digits.
    pub dni: String,

    /// Registered full name.
    pub name: String,
}

/// Trait for resolving a DNI to a registered name.
///
/// Implementations receive an already validated, trimmed DNI. `None` means
/// the registry has no record for it.
pub trait CustomerRegistry: Send + Sync {
    /// Looks up the record for a DNI.
    fn lookup(&self, dni: &str) -> Option<CustomerRecord>;
}

// =============================================================================
// Simulated Registry
// =============================================================================

/// Names returned by the simulated registry, picked by the DNI's last digit.
const REGISTERED_NAMES: [&str; 6] = [
    "Juan Carlos Pérez Rodríguez",
    "María Elena García López",
    "Carlos Alberto Mendoza Silva",
    "Ana Patricia Torres Vega",
    "Luis Fernando Castro Ruiz",
    "Rosa María Flores Herrera",
];

/// Deterministic stand-in for the national identity registry.
///
/// The same DNI always resolves to the same name, which keeps billing flows
/// reproducible without network access. Selection is the last digit of the
/// DNI modulo the name-pool size.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedCustomerRegistry;

impl CustomerRegistry for SimulatedCustomerRegistry {
    fn lookup(&self, dni: &str) -> Option<CustomerRecord> {
        let last_digit = dni.chars().last()?.to_digit(10)?;
        let name = REGISTERED_NAMES[last_digit as usize % REGISTERED_NAMES.len()];
        Some(CustomerRecord {
            dni: dni.to_string(),
            name: name.to_string(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
