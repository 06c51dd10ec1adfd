//! # Caja Store
//!
//! Persistence layer for the Caja POS system, backed by a single JSON
//! preference file.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           caja-store                                    │
//! │                                                                         │
//! │  ┌──────────────┐    ┌──────────────────────────────────────────────┐  │
//! │  │   store.rs   │    │              repository/                     │  │
//! │  │              │    │                                              │  │
//! │  │ Store handle │───►│  product    ── `productos`                   │  │
//! │  │ StoreConfig  │    │  employee   ── `empleados`                   │  │
//! │  │ seeding      │    │  document   ── `documentos`                  │  │
//! │  └──────┬───────┘    │  metrics    ── `ventas_diarias`,             │  │
//! │         │            │               `ventas_mensuales`,            │  │
//! │         │            │               `productos_vendidos`           │  │
//! │         │            └──────────────────┬───────────────────────────┘  │
//! │         ▼                               ▼                              │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  prefs.rs - PrefsFile (JSON object, atomic rewrite per put)      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//! ```rust
//! use caja_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::in_memory()).unwrap();
//!
//! let catalog = store.products().list().unwrap();
//! assert_eq!(catalog.len(), 7);
//!
//! let total = store.metrics().add_daily_sales(350.0).unwrap();
//! assert_eq!(total, 8800.0);
//! ```
//!
//! For a real deployment use [`StoreConfig::at_default_location`] or
//! [`StoreConfig::new`] with an explicit path; the file and its parent
//! directories are created on demand.

pub mod error;
pub mod keys;
pub mod prefs;
pub mod repository;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use prefs::PrefsFile;
pub use repository::{
    DocumentRepository, EmployeeRepository, MetricsRepository, ProductRepository,
};
pub use store::{default_prefs_path, Store, StoreConfig, PREFS_FILE_NAME, PREFS_PATH_ENV};
