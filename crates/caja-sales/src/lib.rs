//! # caja-sales: Sales Services for Caja POS
//!
//! This crate is the service layer a host UI drives. It glues the pure rules
//! in `caja-core` to the preference store in `caja-store` and owns every
//! workflow with a side effect: issuing documents, punching the clock,
//! assembling the dashboard.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sales Service Architecture                         │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                        Host UI (out of scope)                    │  │
//! │  └───────┬──────────────────────┬─────────────────────┬─────────────┘  │
//! │          ▼                      ▼                     ▼                 │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ BillingService │  │AttendanceService│ │   DashboardService     │    │
//! │  │                │  │                │  │                        │    │
//! │  │ lookup_customer│  │ punch (toggle) │  │ snapshot, low_stock,   │    │
//! │  │ issue_document │  │ punch_in/out   │  │ category_breakdown,    │    │
//! │  │                │  │ mark_absent    │  │ weekly_sales,          │    │
//! │  │                │  │ summary        │  │ highlights             │    │
//! │  └───────┬────────┘  └───────┬────────┘  └───────────┬────────────┘    │
//! │          │                   │                       │                 │
//! │          │   ┌───────────────┴──────┐                │                 │
//! │          ▼   ▼                      ▼                ▼                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │              caja-store (Store + repositories)                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  COLLABORATOR TRAITS (swap in test doubles or real clients):           │
//! │  • CustomerRegistry - DNI → name (SimulatedCustomerRegistry built in)  │
//! │  • SellerSession    - who is at the register (StaffSession built in)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`billing`] - Document issuing, stock take, seller session
//! - [`attendance`] - Punch clock over the roster
//! - [`dashboard`] - Counters, low stock, category breakdown, highlights
//! - [`registry`] - Customer registry trait + simulation
//! - [`docnum`] - Document ids and date/time stamps
//! - [`config`] - App configuration with env overrides
//! - [`error`] - Sales error types
//!
//! ## Usage
//! ```rust
//! use caja_sales::{AppConfig, BillingService, DashboardService, DocumentRequest};
//! use caja_store::{Store, StoreConfig};
//! use caja_core::DocumentType;
//!
//! let store = Store::open(StoreConfig::in_memory()).unwrap();
//! let config = AppConfig::from_env();
//! let billing = BillingService::new(store.clone(), config.clone());
//!
//! let customer = billing.lookup_customer("45879632").unwrap();
//! let summary = billing
//!     .issue_document(DocumentRequest {
//!         doc_type: DocumentType::Receipt,
//!         customer_id: customer.dni.clone(),
//!         customer_name: customer.name.clone(),
//!         product_desc: "Licuadora Oster".to_string(),
//!         brand: "Oster".to_string(),
//!         model: "BLSTMG-W00".to_string(),
//!         price: "180".to_string(),
//!         salesperson: None,
//!     })
//!     .unwrap();
//! assert_eq!(summary.daily_total, 8630.0);
//!
//! let dashboard = DashboardService::new(store, config);
//! assert_eq!(dashboard.snapshot().unwrap().documents_issued, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod attendance;
pub mod billing;
pub mod config;
pub mod dashboard;
pub mod docnum;
pub mod error;
pub mod registry;

// =============================================================================
// Re-exports
// =============================================================================

pub use attendance::{AttendanceService, AttendanceSummary, PunchOutcome};
pub use billing::{
    BillingService, DocumentRequest, IssueSummary, SellerSession, StaffSession, StockOutcome,
};
pub use config::AppConfig;
pub use dashboard::{
    CategorySales, DashboardHighlights, DashboardService, DashboardSnapshot, WeekdaySales,
};
pub use docnum::generate_document_id;
pub use error::{SalesError, SalesResult};
pub use registry::{CustomerRecord, CustomerRegistry, SimulatedCustomerRegistry};
