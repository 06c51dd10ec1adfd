//! # Domain Types
//!
//! Core domain types used throughout Caja POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Employee     │   │  SalesDocument  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (u32)       │   │  id (string)    │       │
//! │  │  name/brand     │   │  name, role     │   │  doc_type       │       │
//! │  │  category       │   │  clock_in/out   │   │  customer_*     │       │
//! │  │  price, stock   │   │  status         │   │  price, seller  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ EmployeeStatus  │   │  DocumentType   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Active         │   │  Receipt        │                             │
//! │  │  Inactive       │   │  Invoice        │                             │
//! │  │  Absent         │   │  SalesNote      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Products and employees carry small sequential integer ids, unique within
//! their collection. Documents carry a generated display id (timestamp tail
//! plus random suffix) with no uniqueness guarantee beyond improbability.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A catalog product offered by the store.
///
/// Value object: copied in and out of the store on every read/write, never
/// shared by reference across screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: u32,

    /// Display name shown in the inventory list and on documents.
    pub name: String,

    /// Manufacturer brand.
    pub brand: String,

    /// Manufacturer model code.
    pub model: String,

    /// Category grouping for the dashboard breakdown.
    pub category: String,

    /// Unit price in soles.
    pub price: f64,

    /// Units on hand. Unsigned: stock never goes below zero.
    pub stock: u32,
}

impl Product {
    /// Checks whether at least one unit is on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks whether stock has fallen to or below the given threshold.
    #[inline]
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock <= threshold
    }
}

/// Next free catalog id: one past the current maximum.
///
/// The rule the inventory screen uses when registering a product without an
/// id. An empty catalog starts at 1.
pub fn next_product_id(products: &[Product]) -> u32 {
    products.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

// =============================================================================
// Employee Status
// =============================================================================

/// Attendance state of an employee.
///
/// Transitions are user-driven from the staff screen; no ordering is
/// enforced beyond what the punch flow applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Punched in, currently on shift.
    Active,
    /// Shift over, punched out.
    Inactive,
    /// Not punched in today.
    Absent,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        EmployeeStatus::Absent
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmployeeStatus::Active => "Activo",
            EmployeeStatus::Inactive => "Inactivo",
            EmployeeStatus::Absent => "Ausente",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Employee
// =============================================================================

/// A store employee tracked by the attendance screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier within the roster.
    pub id: u32,

    /// Full display name.
    pub name: String,

    /// Job title shown in the staff list ("Admin", "Vendedor").
    pub role: String,

    /// Clock-in time for the current shift ("HH:MM"), if punched in.
    pub clock_in: Option<String>,

    /// Clock-out time for the current shift ("HH:MM"), if punched out.
    pub clock_out: Option<String>,

    /// Current attendance state.
    pub status: EmployeeStatus,
}

impl Employee {
    /// Checks whether the employee is currently on shift.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

// =============================================================================
// Document Type
// =============================================================================

/// The kind of sales document issued at the till.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Boleta de venta - the everyday consumer receipt.
    Receipt,
    /// Factura - tax invoice for business customers.
    Invoice,
    /// Nota de venta - informal sales note.
    SalesNote,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentType::Receipt => "Boleta",
            DocumentType::Invoice => "Factura",
            DocumentType::SalesNote => "Nota de Venta",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Sales Document
// =============================================================================

/// A generated sales record (receipt, invoice, or sales note).
///
/// Documents form an append-only history kept newest-first. Product fields
/// are frozen copies of what was typed at the till, not references into the
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDocument {
    /// Display identifier: last six digits of the issue timestamp plus a
    /// four-digit random suffix.
    pub id: String,

    /// Kind of document issued.
    pub doc_type: DocumentType,

    /// Issue date, `dd/MM/yyyy`.
    pub date: String,

    /// Issue time, `HH:mm`.
    pub time: String,

    /// Customer DNI (eight digits).
    pub customer_id: String,

    /// Customer full name as returned by the registry lookup.
    pub customer_name: String,

    /// Product description as typed at the till (frozen).
    pub product: String,

    /// Product brand as typed at the till (frozen).
    pub brand: String,

    /// Product model as typed at the till (frozen).
    pub model: String,

    /// Sale price in soles.
    pub price: f64,

    /// Name of the salesperson who issued the document.
    pub salesperson: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_status_default() {
        assert_eq!(EmployeeStatus::default(), EmployeeStatus::Absent);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(EmployeeStatus::Active.to_string(), "Activo");
        assert_eq!(EmployeeStatus::Inactive.to_string(), "Inactivo");
        assert_eq!(EmployeeStatus::Absent.to_string(), "Ausente");
    }

    #[test]
    fn test_document_type_labels() {
        assert_eq!(DocumentType::Receipt.to_string(), "Boleta");
        assert_eq!(DocumentType::Invoice.to_string(), "Factura");
        assert_eq!(DocumentType::SalesNote.to_string(), "Nota de Venta");
    }

    #[test]
    fn test_enums_serialize_snake_case() {
        let status = serde_json::to_string(&EmployeeStatus::Absent).unwrap();
        assert_eq!(status, "\"absent\"");

        let doc_type = serde_json::to_string(&DocumentType::SalesNote).unwrap();
        assert_eq!(doc_type, "\"sales_note\"");
    }

    #[test]
    fn test_stock_helpers() {
        let mut product = Product {
            id: 1,
            name: "Licuadora Oster".to_string(),
            brand: "Oster".to_string(),
            model: "BLSTMG-W00".to_string(),
            category: "Cocina".to_string(),
            price: 180.0,
            stock: 15,
        };
        assert!(product.in_stock());
        assert!(!product.is_low_stock(5));

        product.stock = 0;
        assert!(!product.in_stock());
        assert!(product.is_low_stock(5));
    }

    #[test]
    fn test_next_product_id() {
        assert_eq!(next_product_id(&[]), 1);

        let catalog = vec![
            Product {
                id: 3,
                name: "Microondas Panasonic".to_string(),
                brand: "Panasonic".to_string(),
                model: "NN-ST27JW".to_string(),
                category: "Cocina".to_string(),
                price: 350.0,
                stock: 12,
            },
            Product {
                id: 7,
                name: "Cocina a Gas Bosch".to_string(),
                brand: "Bosch".to_string(),
                model: "PRO465-4Q".to_string(),
                category: "Cocina".to_string(),
                price: 800.0,
                stock: 4,
            },
        ];
        assert_eq!(next_product_id(&catalog), 8);
    }

    #[test]
    fn test_product_round_trip() {
        let product = Product {
            id: 4,
            name: "TV Smart Sony".to_string(),
            brand: "Sony".to_string(),
            model: "KD-55X80J".to_string(),
            category: "Entretenimiento".to_string(),
            price: 1800.0,
            stock: 3,
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
