//! # Billing Service
//!
//! Issues sales documents (boleta, factura, nota de venta) and applies their
//! side effects to the store.
//!
//! ## Issue Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      issue_document Flow                                │
//! │                                                                         │
//! │  DocumentRequest (raw cashier input)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Validate: DNI, customer name, product description, price           │
//! │       │         (any failure stops here, nothing is written)           │
//! │       ▼                                                                 │
//! │  2. Resolve salesperson: request override → signed-in seller →         │
//! │     configured fallback ("Sistema")                                    │
//! │       ▼                                                                 │
//! │  3. Stamp: document id + local date and time                           │
//! │       ▼                                                                 │
//! │  4. Record document (prepended to history)                             │
//! │       ▼                                                                 │
//! │  5. Take one unit of stock from the matching catalog product           │
//! │     (reported as StockOutcome, never a failure)                        │
//! │       ▼                                                                 │
//! │  6. Bump counters: daily sales, monthly sales, units sold              │
//! │       ▼                                                                 │
//! │  IssueSummary (document + stock outcome + new totals)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use caja_core::validation::{parse_price, validate_customer_name, validate_dni, validate_product_desc};
use caja_core::{match_product, DocumentType, SalesDocument};
use caja_store::Store;

use crate::config::AppConfig;
use crate::docnum::{current_date, current_time, generate_document_id};
use crate::error::{SalesError, SalesResult};
use crate::registry::{CustomerRecord, CustomerRegistry, SimulatedCustomerRegistry};

// =============================================================================
// Seller Session
// =============================================================================

/// Trait for resolving who is at the register (implemented by the host).
pub trait SellerSession: Send + Sync {
    /// Name of the seller currently signed in, if any.
    fn current_seller(&self) -> Option<String>;
}

/// Roster-backed session: the first active employee is at the register.
#[derive(Debug, Clone)]
pub struct StaffSession {
    store: Store,
}

impl StaffSession {
    pub fn new(store: Store) -> Self {
        StaffSession { store }
    }
}

impl SellerSession for StaffSession {
    fn current_seller(&self) -> Option<String> {
        let roster = self.store.employees().list().ok()?;
        roster.into_iter().find(|e| e.is_active()).map(|e| e.name)
    }
}

// =============================================================================
// Request / Result Types
// =============================================================================

/// Raw cashier input for one document.
///
/// `price` is kept as entered so a non-numeric value surfaces as a typed
/// validation error instead of a parse panic upstream.
#[derive(Debug, Clone)]
pub struct DocumentRequest {
    /// Kind of document to issue.
    pub doc_type: DocumentType,

    /// Customer DNI, eight digits.
    pub customer_id: String,

    /// Customer full name (typed or filled from a registry lookup).
    pub customer_name: String,

    /// Free-text product description, matched against the catalog.
    pub product_desc: String,

    /// Product brand (optional free text).
    pub brand: String,

    /// Product model (optional free text).
    pub model: String,

    /// Sale price as entered, in PEN.
    pub price: String,

    /// Salesperson override. `None` resolves through the session.
    pub salesperson: Option<String>,
}

/// What happened to catalog stock when a document was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockOutcome {
    /// A catalog product matched and one unit was taken.
    Decremented { product_id: u32, remaining: u32 },

    /// A catalog product matched but had no units left.
    OutOfStock { product_id: u32 },

    /// Nothing in the catalog matched the description.
    NoMatch,
}

/// Result of issuing a document.
#[derive(Debug, Clone)]
pub struct IssueSummary {
    /// The recorded document.
    pub document: SalesDocument,

    /// Stock side effect of the sale.
    pub stock: StockOutcome,

    /// Daily sales total after this sale (PEN).
    pub daily_total: f64,

    /// Monthly sales total after this sale (PEN).
    pub monthly_total: f64,

    /// Units-sold counter after this sale.
    pub units_sold: i64,
}

impl IssueSummary {
    /// The confirmation notice shown at the till.
    ///
    /// ## Example
    /// `Boleta generada exitosamente N° 8472915836`
    pub fn confirmation(&self) -> String {
        format!(
            "{} generada exitosamente N° {}",
            self.document.doc_type, self.document.id
        )
    }
}

// =============================================================================
// Billing Service
// =============================================================================

/// Service issuing sales documents.
pub struct BillingService {
    store: Store,
    config: AppConfig,
    registry: Arc<dyn CustomerRegistry>,
    session: Arc<dyn SellerSession>,
}

impl BillingService {
    /// Creates a billing service with the default collaborators: the
    /// simulated customer registry and the roster-backed seller session.
    pub fn new(store: Store, config: AppConfig) -> Self {
        let session = Arc::new(StaffSession::new(store.clone()));
        Self::with_collaborators(store, config, Arc::new(SimulatedCustomerRegistry), session)
    }

    /// Creates a billing service with custom collaborators.
    pub fn with_collaborators(
        store: Store,
        config: AppConfig,
        registry: Arc<dyn CustomerRegistry>,
        session: Arc<dyn SellerSession>,
    ) -> Self {
        BillingService {
            store,
            config,
            registry,
            session,
        }
    }

    /// Resolves a customer name from a DNI.
    ///
    /// ## Returns
    /// * `Ok(CustomerRecord)` - Registered record for the DNI
    /// * `Err(SalesError::Validation)` - DNI is not eight digits
    /// * `Err(SalesError::CustomerNotFound)` - Registry has no record
    pub fn lookup_customer(&self, dni: &str) -> SalesResult<CustomerRecord> {
        validate_dni(dni)?;
        let dni = dni.trim();
        self.registry
            .lookup(dni)
            .ok_or_else(|| SalesError::CustomerNotFound {
                dni: dni.to_string(),
            })
    }

    /// Issues a sales document.
    ///
    /// Validates the request, records the document, takes one unit of stock
    /// from the matching catalog product, and bumps the sales counters.
    /// A stock miss is reported in the summary, not as an error: the sale
    /// already happened at the register.
    pub fn issue_document(&self, request: DocumentRequest) -> SalesResult<IssueSummary> {
        validate_dni(&request.customer_id)?;
        validate_customer_name(&request.customer_name)?;
        validate_product_desc(&request.product_desc)?;
        let price = parse_price(&request.price)?;

        let salesperson = request
            .salesperson
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.session.current_seller())
            .unwrap_or_else(|| self.config.fallback_seller.clone());

        let document = SalesDocument {
            id: generate_document_id(),
            doc_type: request.doc_type,
            date: current_date(),
            time: current_time(),
            customer_id: request.customer_id.trim().to_string(),
            customer_name: request.customer_name.trim().to_string(),
            product: request.product_desc.trim().to_string(),
            brand: request.brand.trim().to_string(),
            model: request.model.trim().to_string(),
            price,
            salesperson,
        };

        self.store.documents().add(document.clone())?;
        let stock = self.take_unit(&document)?;

        let metrics = self.store.metrics();
        let daily_total = metrics.add_daily_sales(price)?;
        let monthly_total = metrics.add_monthly_sales(price)?;
        let units_sold = metrics.increment_units_sold()?;

        info!(
            id = %document.id,
            doc_type = %document.doc_type,
            price,
            salesperson = %document.salesperson,
            "Issued sales document"
        );

        Ok(IssueSummary {
            document,
            stock,
            daily_total,
            monthly_total,
            units_sold,
        })
    }

    /// Takes one unit of stock for the sold product, if it can be matched.
    fn take_unit(&self, document: &SalesDocument) -> SalesResult<StockOutcome> {
        let catalog = self.store.products().list()?;

        match match_product(&catalog, &document.product, &document.brand, &document.model) {
            Some(product) if product.in_stock() => {
                let remaining = product.stock - 1;
                self.store.products().update_stock(product.id, remaining)?;
                debug!(product_id = product.id, remaining, "Took one unit of stock");
                Ok(StockOutcome::Decremented {
                    product_id: product.id,
                    remaining,
                })
            }
            Some(product) => {
                warn!(product_id = product.id, "Matched product has no stock left");
                Ok(StockOutcome::OutOfStock {
                    product_id: product.id,
                })
            }
            None => {
                debug!(desc = %document.product, "No catalog product matched the sale");
                Ok(StockOutcome::NoMatch)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use caja_core::ValidationError;
    use caja_store::StoreConfig;

    fn init_logging() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn open_store() -> Store {
        Store::open(StoreConfig::in_memory()).unwrap()
    }

    fn billing_for(store: Store) -> BillingService {
        BillingService::new(store, AppConfig::default())
    }

    fn receipt_request() -> DocumentRequest {
        DocumentRequest {
            doc_type: DocumentType::Receipt,
            customer_id: "45879632".to_string(),
            customer_name: "Juan Carlos Pérez Rodríguez".to_string(),
            product_desc: "Licuadora Oster".to_string(),
            brand: "Oster".to_string(),
            model: "BLSTMG-W00".to_string(),
            price: "180".to_string(),
            salesperson: None,
        }
    }

    #[test]
    fn test_issue_receipt_end_to_end() {
        init_logging();
        let store = open_store();
        let billing = billing_for(store.clone());

        let summary = billing.issue_document(receipt_request()).unwrap();

        assert_eq!(summary.document.doc_type, DocumentType::Receipt);
        assert_eq!(summary.document.price, 180.0);
        assert_eq!(summary.document.id.len(), 10);
        assert_eq!(
            summary.stock,
            StockOutcome::Decremented {
                product_id: 5,
                remaining: 14
            }
        );
        assert_eq!(summary.daily_total, 8630.0);
        assert_eq!(summary.monthly_total, 125_480.0);
        assert_eq!(summary.units_sold, 48);

        // First active employee in the seeded roster is at the register.
        assert_eq!(summary.document.salesperson, "María González");

        let history = store.documents().list().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, summary.document.id);
    }

    #[test]
    fn test_invalid_dni_writes_nothing() {
        let store = open_store();
        let billing = billing_for(store.clone());

        let mut request = receipt_request();
        request.customer_id = "12AB".to_string();

        let err = billing.issue_document(request).unwrap_err();
        assert!(matches!(err, SalesError::Validation(_)));

        assert!(store.documents().list().unwrap().is_empty());
        assert_eq!(store.metrics().daily_sales().unwrap(), 8450.0);
    }

    #[test]
    fn test_non_numeric_price_is_typed_error() {
        let billing = billing_for(open_store());

        let mut request = receipt_request();
        request.price = "ciento ochenta".to_string();

        let err = billing.issue_document(request).unwrap_err();
        assert!(matches!(
            err,
            SalesError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_zero_price_must_be_positive() {
        let billing = billing_for(open_store());

        let mut request = receipt_request();
        request.price = "0".to_string();

        let err = billing.issue_document(request).unwrap_err();
        assert!(matches!(
            err,
            SalesError::Validation(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_salesperson_override_wins() {
        let billing = billing_for(open_store());

        let mut request = receipt_request();
        request.salesperson = Some("Carlos Rodríguez".to_string());

        let summary = billing.issue_document(request).unwrap();
        assert_eq!(summary.document.salesperson, "Carlos Rodríguez");
    }

    #[test]
    fn test_fallback_salesperson_with_empty_roster() {
        let store = open_store();
        store.employees().save(&[]).unwrap();
        let billing = billing_for(store);

        let summary = billing.issue_document(receipt_request()).unwrap();
        assert_eq!(summary.document.salesperson, "Sistema");
    }

    #[test]
    fn test_confirmation_notice() {
        let billing = billing_for(open_store());

        let summary = billing.issue_document(receipt_request()).unwrap();
        assert_eq!(
            summary.confirmation(),
            format!("Boleta generada exitosamente N° {}", summary.document.id)
        );
    }

    #[test]
    fn test_out_of_stock_is_reported_not_failed() {
        let store = open_store();
        store.products().update_stock(4, 0).unwrap();
        let billing = billing_for(store.clone());

        let mut request = receipt_request();
        request.product_desc = "TV Smart Sony".to_string();
        request.brand = "Sony".to_string();
        request.model = "KD-55X80J".to_string();
        request.price = "1800".to_string();

        let summary = billing.issue_document(request).unwrap();
        assert_eq!(summary.stock, StockOutcome::OutOfStock { product_id: 4 });

        // The sale is still recorded and counted.
        assert_eq!(store.documents().list().unwrap().len(), 1);
        assert_eq!(summary.units_sold, 48);
    }

    #[test]
    fn test_unmatched_product_leaves_catalog_alone() {
        let store = open_store();
        let billing = billing_for(store.clone());

        let mut request = receipt_request();
        request.product_desc = "Plancha Philips".to_string();
        request.brand = "Philips".to_string();
        request.model = "GC1742".to_string();

        let summary = billing.issue_document(request).unwrap();
        assert_eq!(summary.stock, StockOutcome::NoMatch);

        let catalog = store.products().list().unwrap();
        let total_stock: u32 = catalog.iter().map(|p| p.stock).sum();
        assert_eq!(total_stock, 53);
    }

    #[test]
    fn test_lookup_customer_resolves_name() {
        let billing = billing_for(open_store());

        let record = billing.lookup_customer("45879632").unwrap();
        assert_eq!(record.name, "Carlos Alberto Mendoza Silva");

        let err = billing.lookup_customer("4587").unwrap_err();
        assert!(matches!(err, SalesError::Validation(_)));
    }

    #[test]
    fn test_custom_collaborators() {
        struct FixedRegistry;
        impl CustomerRegistry for FixedRegistry {
            fn lookup(&self, dni: &str) -> Option<CustomerRecord> {
                Some(CustomerRecord {
                    dni: dni.to_string(),
                    name: "Cliente Genérico".to_string(),
                })
            }
        }

        struct FixedSession;
        impl SellerSession for FixedSession {
            fn current_seller(&self) -> Option<String> {
                Some("Pedro Ventas".to_string())
            }
        }

        let billing = BillingService::with_collaborators(
            open_store(),
            AppConfig::default(),
            Arc::new(FixedRegistry),
            Arc::new(FixedSession),
        );

        let record = billing.lookup_customer("45879632").unwrap();
        assert_eq!(record.name, "Cliente Genérico");

        let summary = billing.issue_document(receipt_request()).unwrap();
        assert_eq!(summary.document.salesperson, "Pedro Ventas");
    }

    #[test]
    fn test_registry_without_record() {
        struct EmptyRegistry;
        impl CustomerRegistry for EmptyRegistry {
            fn lookup(&self, _dni: &str) -> Option<CustomerRecord> {
                None
            }
        }

        let store = open_store();
        let session = Arc::new(StaffSession::new(store.clone()));
        let billing = BillingService::with_collaborators(
            store,
            AppConfig::default(),
            Arc::new(EmptyRegistry),
            session,
        );

        let err = billing.lookup_customer("45879632").unwrap_err();
        assert!(matches!(err, SalesError::CustomerNotFound { ref dni } if dni == "45879632"));
    }
}
