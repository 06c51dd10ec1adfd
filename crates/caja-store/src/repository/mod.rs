//! # Repositories
//!
//! Typed access to the preference store, one repository per fixed key:
//!
//! - [`ProductRepository`] - catalog (`productos`)
//! - [`EmployeeRepository`] - roster (`empleados`)
//! - [`DocumentRepository`] - sales history (`documentos`)
//! - [`MetricsRepository`] - sales counters (`ventas_*`, `productos_vendidos`)
//!
//! Repositories are cheap handles over the shared store. Obtain them through
//! the [`Store`](crate::Store) accessors rather than constructing them
//! directly.

pub mod document;
pub mod employee;
pub mod metrics;
pub mod product;

pub use document::DocumentRepository;
pub use employee::EmployeeRepository;
pub use metrics::MetricsRepository;
pub use product::ProductRepository;
