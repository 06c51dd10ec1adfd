//! # Product Repository
//!
//! Catalog reads and writes against the `productos` key.
//!
//! The whole catalog is stored as one JSON array. Every write re-encodes the
//! full array; the catalog is tens of rows with a single writer.

use tracing::debug;

use caja_core::Product;

use crate::error::StoreResult;
use crate::keys;
use crate::seed;
use crate::store::Store;

/// Repository for catalog operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: Store,
}

impl ProductRepository {
    /// Creates a new product repository.
    pub(crate) fn new(store: Store) -> Self {
        ProductRepository { store }
    }

    /// Returns the full catalog.
    ///
    /// ## Returns
    /// * `Ok(Vec<Product>)` - Stored catalog, or the default catalog when the
    ///   key is absent. The fallback is returned without being written.
    /// * `Err(StoreError::MalformedValue)` - Stored value failed to decode
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        self.store.with_prefs(|prefs| {
            Ok(prefs
                .get::<Vec<Product>>(keys::PRODUCTS)?
                .unwrap_or_else(seed::default_catalog))
        })
    }

    /// Replaces the stored catalog.
    pub fn save(&self, products: &[Product]) -> StoreResult<()> {
        debug!(count = products.len(), "Saving catalog");
        self.store
            .with_prefs_mut(|prefs| prefs.put(keys::PRODUCTS, &products))
    }

    /// Appends a product to the catalog.
    ///
    /// The caller assigns the id; [`caja_core::next_product_id`] computes the
    /// next free one from a listed catalog.
    pub fn add(&self, product: Product) -> StoreResult<()> {
        debug!(id = product.id, name = %product.name, "Adding product");
        self.store.with_prefs_mut(|prefs| {
            let mut catalog = prefs
                .get::<Vec<Product>>(keys::PRODUCTS)?
                .unwrap_or_else(seed::default_catalog);
            catalog.push(product);
            prefs.put(keys::PRODUCTS, &catalog)
        })
    }

    /// Sets the stock level of one product.
    ///
    /// ## Edge Cases
    /// An id not in the catalog is ignored: the call logs and returns `Ok`
    /// without touching the store.
    pub fn update_stock(&self, id: u32, new_stock: u32) -> StoreResult<()> {
        self.store.with_prefs_mut(|prefs| {
            let mut catalog = prefs
                .get::<Vec<Product>>(keys::PRODUCTS)?
                .unwrap_or_else(seed::default_catalog);

            match catalog.iter_mut().find(|p| p.id == id) {
                Some(product) => {
                    debug!(id, new_stock, "Updating product stock");
                    product.stock = new_stock;
                    prefs.put(keys::PRODUCTS, &catalog)
                }
                None => {
                    debug!(id, "Product not in catalog, ignoring stock update");
                    Ok(())
                }
            }
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;
    use caja_core::next_product_id;

    fn open_store() -> Store {
        Store::open(StoreConfig::in_memory()).unwrap()
    }

    #[test]
    fn test_list_returns_seeded_catalog() {
        let repo = open_store().products();
        let catalog = repo.list().unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog[0].name, "Refrigeradora LG");
    }

    #[test]
    fn test_add_appends_with_next_id() {
        let repo = open_store().products();
        let catalog = repo.list().unwrap();
        let id = next_product_id(&catalog);
        assert_eq!(id, 8);

        repo.add(Product {
            id,
            name: "Hervidor Imaco".to_string(),
            brand: "Imaco".to_string(),
            model: "KE1705".to_string(),
            category: "Cocina".to_string(),
            price: 65.0,
            stock: 20,
        })
        .unwrap();

        let catalog = repo.list().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.last().unwrap().id, 8);
    }

    #[test]
    fn test_update_stock_changes_one_product() {
        let repo = open_store().products();
        repo.update_stock(4, 0).unwrap();

        let catalog = repo.list().unwrap();
        assert_eq!(catalog.iter().find(|p| p.id == 4).unwrap().stock, 0);
        assert_eq!(catalog.iter().find(|p| p.id == 5).unwrap().stock, 15);
    }

    #[test]
    fn test_update_stock_unknown_id_is_ignored() {
        let repo = open_store().products();
        repo.update_stock(999, 10).unwrap();
        assert_eq!(repo.list().unwrap().len(), 7);
    }

    #[test]
    fn test_save_then_list_round_trips() {
        let repo = open_store().products();

        let mut catalog = repo.list().unwrap();
        catalog[0].price = 2399.0;
        catalog[0].stock = 9;
        repo.save(&catalog).unwrap();

        assert_eq!(repo.list().unwrap(), catalog);
    }

    #[test]
    fn test_save_replaces_catalog() {
        let repo = open_store().products();
        repo.save(&[]).unwrap();
        assert!(repo.list().unwrap().is_empty());
    }
}
