//! # Metrics Repository
//!
//! Scalar sales counters: daily revenue, monthly revenue, units sold.
//!
//! ## Counter Semantics
//! Each counter lives under its own key and is accumulated with a
//! read-modify-write cycle done under the store lock. A getter that finds
//! the key absent returns the documented baseline without writing it; after
//! a seeded open the keys always exist, so the baseline and the stored value
//! never diverge.

use tracing::debug;

use crate::error::StoreResult;
use crate::keys;
use crate::seed::{DEFAULT_DAILY_SALES, DEFAULT_MONTHLY_SALES, DEFAULT_UNITS_SOLD};
use crate::store::Store;

/// Repository for the sales counters.
#[derive(Debug, Clone)]
pub struct MetricsRepository {
    store: Store,
}

impl MetricsRepository {
    pub(crate) fn new(store: Store) -> Self {
        MetricsRepository { store }
    }

    /// Returns today's revenue (PEN).
    pub fn daily_sales(&self) -> StoreResult<f64> {
        self.store.with_prefs(|prefs| {
            Ok(prefs
                .get::<f64>(keys::DAILY_SALES)?
                .unwrap_or(DEFAULT_DAILY_SALES))
        })
    }

    /// Adds `amount` to today's revenue.
    ///
    /// ## Returns
    /// The new total.
    pub fn add_daily_sales(&self, amount: f64) -> StoreResult<f64> {
        self.store.with_prefs_mut(|prefs| {
            let total = prefs
                .get::<f64>(keys::DAILY_SALES)?
                .unwrap_or(DEFAULT_DAILY_SALES)
                + amount;
            prefs.put(keys::DAILY_SALES, &total)?;
            debug!(amount, total, "Accumulated daily sales");
            Ok(total)
        })
    }

    /// Resets today's revenue to zero (end-of-day close).
    pub fn reset_daily_sales(&self) -> StoreResult<()> {
        debug!("Resetting daily sales");
        self.store
            .with_prefs_mut(|prefs| prefs.put(keys::DAILY_SALES, &0.0_f64))
    }

    /// Returns this month's revenue (PEN).
    pub fn monthly_sales(&self) -> StoreResult<f64> {
        self.store.with_prefs(|prefs| {
            Ok(prefs
                .get::<f64>(keys::MONTHLY_SALES)?
                .unwrap_or(DEFAULT_MONTHLY_SALES))
        })
    }

    /// Adds `amount` to this month's revenue.
    ///
    /// ## Returns
    /// The new total.
    pub fn add_monthly_sales(&self, amount: f64) -> StoreResult<f64> {
        self.store.with_prefs_mut(|prefs| {
            let total = prefs
                .get::<f64>(keys::MONTHLY_SALES)?
                .unwrap_or(DEFAULT_MONTHLY_SALES)
                + amount;
            prefs.put(keys::MONTHLY_SALES, &total)?;
            debug!(amount, total, "Accumulated monthly sales");
            Ok(total)
        })
    }

    /// Returns the units-sold counter.
    pub fn units_sold(&self) -> StoreResult<i64> {
        self.store.with_prefs(|prefs| {
            Ok(prefs
                .get::<i64>(keys::UNITS_SOLD)?
                .unwrap_or(DEFAULT_UNITS_SOLD))
        })
    }

    /// Increments the units-sold counter by one.
    ///
    /// ## Returns
    /// The new count.
    pub fn increment_units_sold(&self) -> StoreResult<i64> {
        self.store.with_prefs_mut(|prefs| {
            let count = prefs
                .get::<i64>(keys::UNITS_SOLD)?
                .unwrap_or(DEFAULT_UNITS_SOLD)
                + 1;
            prefs.put(keys::UNITS_SOLD, &count)?;
            debug!(count, "Incremented units sold");
            Ok(count)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
