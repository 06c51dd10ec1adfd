//! # Product Matching
//!
//! Lookup rule connecting the free-text billing form to the catalog.
//!
//! The billing screen never picks a catalog row directly; the cashier types
//! a description, brand and model, and the stock update finds the product
//! those fields describe. The rule is loose: a misspelled description still
//! hits when brand and model are right.

use crate::types::Product;

/// Finds the catalog product a billing form line refers to.
///
/// ## Rule
/// First product (catalog order) whose
/// - name contains the typed description (case-insensitive), **or**
/// - brand and model both equal the typed values (case-insensitive).
///
/// Callers must validate the description first: an empty description
/// matches any name.
///
/// ## Example
/// ```rust
/// use caja_core::matching::match_product;
/// use caja_core::types::Product;
///
/// let catalog = vec![Product {
///     id: 1,
///     name: "Refrigeradora LG".to_string(),
///     brand: "LG".to_string(),
///     model: "GN-H702HLHU".to_string(),
///     category: "Refrigeración".to_string(),
///     price: 2500.0,
///     stock: 5,
/// }];
///
/// let found = match_product(&catalog, "refrigeradora", "", "").unwrap();
/// assert_eq!(found.id, 1);
/// ```
pub fn match_product<'a>(
    products: &'a [Product],
    description: &str,
    brand: &str,
    model: &str,
) -> Option<&'a Product> {
    let description = description.trim().to_lowercase();

    products.iter().find(|p| {
        p.name.to_lowercase().contains(&description)
            || (eq_ignore_case(&p.brand, brand) && eq_ignore_case(&p.model, model))
    })
}

// Accent-safe comparison: ASCII-only folding would miss "Climatización".
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.trim().to_lowercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
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
                id: 5,
                name: "Licuadora Oster".to_string(),
                brand: "Oster".to_string(),
                model: "BLSTMG-W00".to_string(),
                category: "Cocina".to_string(),
                price: 180.0,
                stock: 15,
            },
        ]
    }

    #[test]
    fn test_match_by_partial_name() {
        let products = catalog();
        let found = match_product(&products, "lavadora", "", "").unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let products = catalog();
        let found = match_product(&products, "REFRIGERADORA lg", "", "").unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn test_match_by_brand_and_model() {
        let products = catalog();
        let found = match_product(&products, "zzz no such name", "oster", "blstmg-w00").unwrap();
        assert_eq!(found.id, 5);
    }

    #[test]
    fn test_brand_alone_does_not_match() {
        let products = catalog();
        assert!(match_product(&products, "zzz", "Samsung", "wrong-model").is_none());
    }

    #[test]
    fn test_no_match() {
        let products = catalog();
        assert!(match_product(&products, "teatera", "Acme", "T-1000").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let products = catalog();
        // "dora" appears in Refrigeradora, Lavadora and Licuadora; catalog
        // order decides.
        let found = match_product(&products, "dora", "", "").unwrap();
        assert_eq!(found.id, 1);
    }
}
