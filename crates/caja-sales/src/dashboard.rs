//! # Dashboard Service
//!
//! Read-only aggregates for the owner's dashboard: sales counters, staff
//! head-count, low-stock alerts, the category breakdown of the catalog, and
//! the highlight cards derived from the document history.

use caja_core::Product;
use caja_store::Store;

use crate::config::AppConfig;
use crate::docnum::current_date;
use crate::error::SalesResult;

// =============================================================================
// Data Shapes
// =============================================================================

/// One dashboard refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// Today's revenue (PEN).
    pub daily_sales: f64,

    /// This month's revenue (PEN).
    pub monthly_sales: f64,

    /// Units-sold counter.
    pub units_sold: i64,

    /// Units in stock across the whole catalog.
    pub inventory_units: u32,

    /// Employees currently clocked in.
    pub active_staff: usize,

    /// Roster size.
    pub total_staff: usize,

    /// Documents in the history.
    pub documents_issued: usize,
}

/// Catalog totals for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySales {
    pub category: String,

    /// Units in stock across the category.
    pub units: u32,

    /// Stock value at list price (PEN).
    pub value: f64,

    /// Share of total stock units held by the category, in percent.
    /// Zero when the catalog holds no stock at all.
    pub share: f64,
}

/// Highlight cards shown next to the counters.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardHighlights {
    /// Product description appearing on the most documents. `None` while
    /// the history is empty; the most recent one wins a tie.
    pub top_product: Option<String>,

    /// Category holding the most stock units. `None` for an empty catalog;
    /// the first category in catalog order wins a tie.
    pub top_category: Option<String>,

    /// Products at or below the low-stock threshold.
    pub low_stock_count: usize,

    /// Average document price across the whole history (PEN). Zero while
    /// the history is empty.
    pub average_ticket: f64,

    /// Documents issued on today's date.
    pub documents_today: usize,
}

/// One bar of the weekly sales chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdaySales {
    /// Short Spanish weekday label ("Lun".."Dom").
    pub day: &'static str,

    /// Revenue for that day (PEN).
    pub amount: f64,
}

// TODO: replace the fixed series once the store keeps per-day totals instead
// of a single daily counter.
const WEEKLY_SERIES: [(&str, f64); 7] = [
    ("Lun", 1200.0),
    ("Mar", 1800.0),
    ("Mié", 1500.0),
    ("Jue", 2200.0),
    ("Vie", 2800.0),
    ("Sáb", 3200.0),
    ("Dom", 1600.0),
];

// =============================================================================
// Dashboard Service
// =============================================================================

/// Service assembling dashboard data.
#[derive(Debug, Clone)]
pub struct DashboardService {
    store: Store,
    config: AppConfig,
}

impl DashboardService {
    pub fn new(store: Store, config: AppConfig) -> Self {
        DashboardService { store, config }
    }

    /// Returns the headline counters.
    pub fn snapshot(&self) -> SalesResult<DashboardSnapshot> {
        let metrics = self.store.metrics();
        let catalog = self.store.products().list()?;
        let roster = self.store.employees().list()?;
        let history = self.store.documents().list()?;

        Ok(DashboardSnapshot {
            daily_sales: metrics.daily_sales()?,
            monthly_sales: metrics.monthly_sales()?,
            units_sold: metrics.units_sold()?,
            inventory_units: catalog.iter().map(|p| p.stock).sum(),
            active_staff: roster.iter().filter(|e| e.is_active()).count(),
            total_staff: roster.len(),
            documents_issued: history.len(),
        })
    }

    /// Returns products at or below the configured low-stock threshold,
    /// in catalog order.
    pub fn low_stock(&self) -> SalesResult<Vec<Product>> {
        let catalog = self.store.products().list()?;
        Ok(catalog
            .into_iter()
            .filter(|p| p.is_low_stock(self.config.low_stock_threshold))
            .collect())
    }

    /// Returns stock units, value, and unit share per category, in
    /// first-seen catalog order.
    pub fn category_breakdown(&self) -> SalesResult<Vec<CategorySales>> {
        let catalog = self.store.products().list()?;
        let mut breakdown: Vec<CategorySales> = Vec::new();

        for product in &catalog {
            let value = product.price * f64::from(product.stock);
            match breakdown.iter_mut().find(|c| c.category == product.category) {
                Some(entry) => {
                    entry.units += product.stock;
                    entry.value += value;
                }
                None => breakdown.push(CategorySales {
                    category: product.category.clone(),
                    units: product.stock,
                    value,
                    share: 0.0,
                }),
            }
        }

        let total_units: u32 = breakdown.iter().map(|c| c.units).sum();
        if total_units > 0 {
            for entry in &mut breakdown {
                entry.share = f64::from(entry.units) / f64::from(total_units) * 100.0;
            }
        }

        Ok(breakdown)
    }

    /// Returns the highlight cards.
    pub fn highlights(&self) -> SalesResult<DashboardHighlights> {
        let history = self.store.documents().list()?;
        let breakdown = self.category_breakdown()?;

        // Count documents per product description, in history order
        // (newest first), then keep the first strict maximum.
        let mut counts: Vec<(String, usize)> = Vec::new();
        for document in &history {
            match counts.iter_mut().find(|(name, _)| *name == document.product) {
                Some((_, count)) => *count += 1,
                None => counts.push((document.product.clone(), 1)),
            }
        }

        let mut top_product: Option<(String, usize)> = None;
        for (name, count) in counts {
            let beats = top_product.as_ref().map_or(true, |(_, best)| count > *best);
            if beats {
                top_product = Some((name, count));
            }
        }

        let mut top_category: Option<CategorySales> = None;
        for entry in breakdown {
            let beats = top_category
                .as_ref()
                .map_or(true, |best| entry.units > best.units);
            if beats {
                top_category = Some(entry);
            }
        }

        let average_ticket = if history.is_empty() {
            0.0
        } else {
            let revenue: f64 = history.iter().map(|d| d.price).sum();
            revenue / history.len() as f64
        };

        let today = current_date();

        Ok(DashboardHighlights {
            top_product: top_product.map(|(name, _)| name),
            top_category: top_category.map(|c| c.category),
            low_stock_count: self.low_stock()?.len(),
            average_ticket,
            documents_today: history.iter().filter(|d| d.date == today).count(),
        })
    }

    /// Returns the weekly sales chart series.
    pub fn weekly_sales(&self) -> Vec<WeekdaySales> {
        WEEKLY_SERIES
            .iter()
            .map(|&(day, amount)| WeekdaySales { day, amount })
            .collect()
    }

    /// Formats an amount with the configured currency symbol.
    pub fn format_amount(&self, amount: f64) -> String {
        self.config.format_currency(amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
