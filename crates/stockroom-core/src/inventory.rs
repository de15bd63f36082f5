//! # Inventory Container
//!
//! The id-keyed collection of products and every operation the menu exposes.
//!
//! ## Operations
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                        │
//! │                                                                │
//! │  Mutation                     Query                            │
//! │  ────────                     ─────                            │
//! │  add_product(product)         get(id)                          │
//! │  remove_product(id)           search_by_name(name)             │
//! │  sell_product(id, qty)        search_by_type(type)             │
//! │  restock_product(id, qty)     list_all_products()              │
//! │  remove_expired_products()    total_inventory_value()          │
//! │                                                                │
//! │  Single-threaded; every operation runs to completion.          │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use indexmap::IndexMap;

use crate::error::{InventoryError, InventoryResult};
use crate::product::{Product, ProductType};

/// The in-memory product catalog.
///
/// ## Invariants
/// - no two entries share an id (enforced at insertion)
/// - the mapping is the single source of truth; removal destroys the record
/// - iteration order is insertion order, and removals preserve the relative
///   order of the remaining entries, so listing and search output is
///   deterministic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: IndexMap<String, Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            products: IndexMap::new(),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Inserts a product keyed by its id.
    ///
    /// Fails with `DuplicateProductId` if the id is already present; the
    /// mapping is unchanged in that case and the existing entry keeps its
    /// state.
    pub fn add_product(&mut self, product: Product) -> InventoryResult<()> {
        if self.products.contains_key(product.id()) {
            return Err(InventoryError::duplicate_id(product.id()));
        }

        self.products.insert(product.id().to_string(), product);
        Ok(())
    }

    /// Removes a product by id and returns it.
    ///
    /// Fails with `ProductNotFound` if absent. Uses shift-removal so the
    /// remaining entries keep their relative order.
    pub fn remove_product(&mut self, id: &str) -> InventoryResult<Product> {
        self.products
            .shift_remove(id)
            .ok_or_else(|| InventoryError::not_found(id))
    }

    /// Sells `quantity` units of the product with the given id.
    ///
    /// Fails with `ProductNotFound` if absent, otherwise delegates to
    /// [`Product::sell`] (which can fail with `InsufficientStock` or
    /// `InvalidArgument` without touching stock).
    pub fn sell_product(&mut self, id: &str, quantity: u32) -> InventoryResult<()> {
        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| InventoryError::not_found(id))?;
        product.sell(quantity)
    }

    /// Restocks `amount` units of the product with the given id.
    ///
    /// Fails with `ProductNotFound` if absent, otherwise delegates to
    /// [`Product::restock`].
    pub fn restock_product(&mut self, id: &str, amount: u32) -> InventoryResult<()> {
        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| InventoryError::not_found(id))?;
        product.restock(amount)
    }

    /// Removes every expired product and returns their ids in listing order.
    ///
    /// Only Grocery products can expire; everything else is untouched. The
    /// check runs against the current date, so the same inventory can give
    /// different answers on different days.
    pub fn remove_expired_products(&mut self) -> Vec<String> {
        let expired: Vec<String> = self
            .products
            .values()
            .filter(|product| product.is_expired())
            .map(|product| product.id().to_string())
            .collect();

        for id in &expired {
            self.products.shift_remove(id.as_str());
        }

        expired
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Finds products whose name contains `name`, ignoring case.
    ///
    /// Matches are returned in listing order; the result may be empty.
    pub fn search_by_name(&self, name: &str) -> Vec<&Product> {
        let needle = name.to_lowercase();
        self.products
            .values()
            .filter(|product| product.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Finds products of the given variant, in listing order.
    pub fn search_by_type(&self, product_type: ProductType) -> Vec<&Product> {
        self.products
            .values()
            .filter(|product| product.product_type() == product_type)
            .collect()
    }

    /// Returns every product in insertion order.
    pub fn list_all_products(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// Sums `total_value()` over all products; 0.0 when empty.
    pub fn total_inventory_value(&self) -> f64 {
        self.products.values().map(Product::total_value).sum()
    }

    /// Number of products held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the inventory holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn tv() -> Product {
        Product::electronics("E1", "TV", 499.99, 5, 2, "Sony").unwrap()
    }

    fn milk() -> Product {
        Product::grocery("G1", "Milk", 2.5, 10, date(2000, 1, 1)).unwrap()
    }

    fn shirt() -> Product {
        Product::clothing("C1", "Shirt", 19.99, 25, "M", "Cotton").unwrap()
    }

    fn sample_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add_product(tv()).unwrap();
        inventory.add_product(milk()).unwrap();
        inventory.add_product(shirt()).unwrap();
        inventory
    }

    #[test]
    fn test_add_and_get() {
        let mut inventory = Inventory::new();
        inventory.add_product(tv()).unwrap();

        assert_eq!(inventory.len(), 1);
        let product = inventory.get("E1").unwrap();
        assert_eq!(product.name(), "TV");
    }

    #[test]
    fn test_add_duplicate_id_rejected() {
        let mut inventory = Inventory::new();
        inventory.add_product(tv()).unwrap();

        // Same id, different everything else
        let imposter = Product::clothing("E1", "Fake TV Shirt", 9.99, 1, "S", "Wool").unwrap();
        let err = inventory.add_product(imposter).unwrap_err();

        assert!(matches!(err, InventoryError::DuplicateProductId { .. }));
        assert_eq!(inventory.len(), 1);
        // The original entry is untouched
        let kept = inventory.get("E1").unwrap();
        assert_eq!(kept.name(), "TV");
        assert_eq!(kept.quantity_in_stock(), 5);
    }

    #[test]
    fn test_remove_product_returns_record() {
        let mut inventory = sample_inventory();
        let removed = inventory.remove_product("G1").unwrap();

        assert_eq!(removed.name(), "Milk");
        assert_eq!(inventory.len(), 2);
        assert!(inventory.get("G1").is_none());
    }

    #[test]
    fn test_remove_missing_product() {
        let mut inventory = Inventory::new();
        let err = inventory.remove_product("NOPE").unwrap_err();
        assert!(matches!(err, InventoryError::ProductNotFound { .. }));
    }

    #[test]
    fn test_remove_preserves_listing_order() {
        let mut inventory = sample_inventory();
        inventory.remove_product("G1").unwrap();

        let ids: Vec<&str> = inventory
            .list_all_products()
            .iter()
            .map(|p| p.id())
            .collect();
        assert_eq!(ids, vec!["E1", "C1"]);
    }

    #[test]
    fn test_sell_product() {
        let mut inventory = sample_inventory();
        inventory.sell_product("C1", 10).unwrap();
        assert_eq!(inventory.get("C1").unwrap().quantity_in_stock(), 15);
    }

    #[test]
    fn test_sell_product_not_found() {
        let mut inventory = Inventory::new();
        let err = inventory.sell_product("NOPE", 1).unwrap_err();
        assert!(matches!(err, InventoryError::ProductNotFound { .. }));
    }

    #[test]
    fn test_sell_product_insufficient_keeps_state() {
        let mut inventory = sample_inventory();
        let err = inventory.sell_product("E1", 50).unwrap_err();

        assert!(matches!(err, InventoryError::InsufficientStock { .. }));
        assert_eq!(inventory.get("E1").unwrap().quantity_in_stock(), 5);
    }

    #[test]
    fn test_restock_product() {
        let mut inventory = sample_inventory();
        inventory.restock_product("G1", 5).unwrap();
        assert_eq!(inventory.get("G1").unwrap().quantity_in_stock(), 15);
    }

    #[test]
    fn test_search_by_name_is_case_insensitive_substring() {
        let mut inventory = Inventory::new();
        inventory
            .add_product(Product::grocery("G1", "Whole Milk", 3.5, 10, date(2030, 1, 1)).unwrap())
            .unwrap();
        inventory
            .add_product(Product::grocery("G2", "Oat Milk", 4.0, 6, date(2030, 1, 1)).unwrap())
            .unwrap();
        inventory.add_product(shirt()).unwrap();

        let matches = inventory.search_by_name("milk");
        let ids: Vec<&str> = matches.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["G1", "G2"]);

        let matches = inventory.search_by_name("MILK");
        assert_eq!(matches.len(), 2);

        assert!(inventory.search_by_name("salmon").is_empty());
    }

    #[test]
    fn test_search_by_type() {
        let inventory = sample_inventory();

        let groceries = inventory.search_by_type(ProductType::Grocery);
        assert_eq!(groceries.len(), 1);
        assert_eq!(groceries[0].id(), "G1");

        let clothing = inventory.search_by_type(ProductType::Clothing);
        assert_eq!(clothing.len(), 1);
        assert_eq!(clothing[0].id(), "C1");
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let inventory = sample_inventory();
        let ids: Vec<&str> = inventory
            .list_all_products()
            .iter()
            .map(|p| p.id())
            .collect();
        assert_eq!(ids, vec!["E1", "G1", "C1"]);
    }

    #[test]
    fn test_total_inventory_value_empty_is_zero() {
        let inventory = Inventory::new();
        assert_eq!(inventory.total_inventory_value(), 0.0);
    }

    #[test]
    fn test_total_inventory_value_single_product() {
        let mut inventory = Inventory::new();
        inventory
            .add_product(Product::grocery("G1", "Milk", 10.0, 3, date(2030, 1, 1)).unwrap())
            .unwrap();
        assert_eq!(inventory.total_inventory_value(), 30.0);
    }

    #[test]
    fn test_remove_expired_products() {
        let mut inventory = Inventory::new();
        inventory.add_product(tv()).unwrap();
        inventory.add_product(milk()).unwrap(); // expired 2000-01-01
        inventory
            .add_product(Product::grocery("G2", "Cheese", 5.0, 4, date(9999, 12, 31)).unwrap())
            .unwrap();

        let removed = inventory.remove_expired_products();

        assert_eq!(removed, vec!["G1".to_string()]);
        assert!(inventory.get("G1").is_none());
        // Non-grocery and fresh grocery entries stay
        assert!(inventory.get("E1").is_some());
        assert!(inventory.get("G2").is_some());
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_remove_expired_products_none_expired() {
        let mut inventory = Inventory::new();
        inventory.add_product(tv()).unwrap();

        let removed = inventory.remove_expired_products();
        assert!(removed.is_empty());
        assert_eq!(inventory.len(), 1);
    }
}
