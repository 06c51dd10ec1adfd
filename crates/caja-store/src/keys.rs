//! # Preference Keys
//!
//! The fixed key layout of the preference file.
//!
//! ## Layout
//! ```text
//! ┌────────────────────────┬────────────────────────────────────────────┐
//! │ Key                    │ Value encoding                             │
//! ├────────────────────────┼────────────────────────────────────────────┤
//! │ productos              │ JSON array of Product                      │
//! │ empleados              │ JSON array of Employee                     │
//! │ documentos             │ JSON array of SalesDocument, newest-first  │
//! │ ventas_diarias         │ JSON number (float)                        │
//! │ ventas_mensuales       │ JSON number (float)                        │
//! │ productos_vendidos     │ JSON number (integer)                      │
//! └────────────────────────┴────────────────────────────────────────────┘
//! ```
//!
//! Key names are part of the on-disk layout. Renaming one orphans the data
//! stored under it, so treat these as frozen.

/// Product catalog collection.
pub const PRODUCTS: &str = "productos";

/// Employee roster collection.
pub const EMPLOYEES: &str = "empleados";

/// Generated document history, newest-first.
pub const DOCUMENTS: &str = "documentos";

/// Running daily sales total, in soles.
pub const DAILY_SALES: &str = "ventas_diarias";

/// Running monthly sales total, in soles.
pub const MONTHLY_SALES: &str = "ventas_mensuales";

/// Running count of units sold.
pub const UNITS_SOLD: &str = "productos_vendidos";
