//! # Seed Data
//!
//! Default catalog, roster, and counter baselines for a fresh store.
//!
//! ## Seeding Model
//! Seeding happens once, at [`Store::open`](crate::Store::open), and writes
//! only keys that are missing from the preference file. Stored data is never
//! overwritten. After a seeded open every fixed key exists, so later reads
//! and read-modify-write cycles see the same values regardless of whether
//! they came from the seed or from the user.
//!
//! Reads themselves stay pure: a repository getter that finds a key absent
//! (store opened with seeding disabled, or cleared) returns the same defaults
//! without writing anything.

use tracing::{debug, info};

use caja_core::{Employee, EmployeeStatus, Product};

use crate::error::StoreResult;
use crate::keys;
use crate::store::Store;

/// Baseline for the daily sales counter (PEN).
pub const DEFAULT_DAILY_SALES: f64 = 8450.0;

/// Baseline for the monthly sales counter (PEN).
pub const DEFAULT_MONTHLY_SALES: f64 = 125_300.0;

/// Baseline for the units-sold counter.
pub const DEFAULT_UNITS_SOLD: i64 = 47;

/// Returns the default product catalog.
///
/// Seven appliances across five categories, with realistic prices in PEN.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Refrigeradora LG".to_string(),
            brand: "LG".to_string(),
            model: "GN-H702HLHU".to_string(),
            category: "Refrigeración".to_string(),
            price: 2500.0,
            stock: 5,
        },
        Product {
            id: 2,
            name: "Lavadora Samsung".to_string(),
            brand: "Samsung".to_string(),
            model: "WA70H4200SW".to_string(),
            category: "Lavado".to_string(),
            price: 1200.0,
            stock: 8,
        },
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
            id: 4,
            name: "TV Smart Sony".to_string(),
            brand: "Sony".to_string(),
            model: "KD-55X80J".to_string(),
            category: "Entretenimiento".to_string(),
            price: 1800.0,
            stock: 3,
        },
        Product {
            id: 5,
            name: "Licuadora Oster".to_string(),
            brand: "Oster".to_string(),
            model: "BLSTMG-W00".to_string(),
            category: "Cocina".to_string(),
            price: 180.0,
            stock: 15,
        },
        Product {
            id: 6,
            name: "Aire Acondicionado Midea".to_string(),
            brand: "Midea".to_string(),
            model: "MAC-12000BTU".to_string(),
            category: "Climatización".to_string(),
            price: 1500.0,
            stock: 6,
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
    ]
}

/// Returns the default employee roster.
///
/// One admin and three sellers, in the three attendance states the UI
/// distinguishes.
pub fn default_roster() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "María González".to_string(),
            role: "Admin".to_string(),
            clock_in: Some("09:00".to_string()),
            clock_out: None,
            status: EmployeeStatus::Active,
        },
        Employee {
            id: 2,
            name: "Carlos Rodríguez".to_string(),
            role: "Vendedor".to_string(),
            clock_in: Some("09:15".to_string()),
            clock_out: None,
            status: EmployeeStatus::Active,
        },
        Employee {
            id: 3,
            name: "Ana Martínez".to_string(),
            role: "Vendedor".to_string(),
            clock_in: None,
            clock_out: None,
            status: EmployeeStatus::Absent,
        },
        Employee {
            id: 4,
            name: "Luis Pérez".to_string(),
            role: "Vendedor".to_string(),
            clock_in: Some("09:30".to_string()),
            clock_out: Some("18:00".to_string()),
            status: EmployeeStatus::Inactive,
        },
    ]
}

/// Writes default data for every fixed key missing from the store.
///
/// ## Returns
/// The number of keys seeded.
pub(crate) fn seed_missing(store: &Store) -> StoreResult<usize> {
    store.with_prefs_mut(|prefs| {
        let mut seeded = 0;

        if !prefs.contains(keys::PRODUCTS) {
            prefs.put(keys::PRODUCTS, &default_catalog())?;
            debug!(key = keys::PRODUCTS, "Seeded default catalog");
            seeded += 1;
        }
        if !prefs.contains(keys::EMPLOYEES) {
            prefs.put(keys::EMPLOYEES, &default_roster())?;
            debug!(key = keys::EMPLOYEES, "Seeded default roster");
            seeded += 1;
        }
        if !prefs.contains(keys::DOCUMENTS) {
            prefs.put(keys::DOCUMENTS, &Vec::<caja_core::SalesDocument>::new())?;
            debug!(key = keys::DOCUMENTS, "Seeded empty document history");
            seeded += 1;
        }
        if !prefs.contains(keys::DAILY_SALES) {
            prefs.put(keys::DAILY_SALES, &DEFAULT_DAILY_SALES)?;
            seeded += 1;
        }
        if !prefs.contains(keys::MONTHLY_SALES) {
            prefs.put(keys::MONTHLY_SALES, &DEFAULT_MONTHLY_SALES)?;
            seeded += 1;
        }
        if !prefs.contains(keys::UNITS_SOLD) {
            prefs.put(keys::UNITS_SOLD, &DEFAULT_UNITS_SOLD)?;
            seeded += 1;
        }

        if seeded > 0 {
            info!(count = seeded, "Seeded missing preference keys");
        }
        Ok(seeded)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
