//! # Product Types
//!
//! The polymorphic product hierarchy: one `Product` record with a closed
//! set of variants (Electronics, Grocery, Clothing).
//!
//! ## Shape
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  Product                                                       │
//! │  ├── id, name, price, quantity_in_stock     (base fields)      │
//! │  └── kind: ProductKind                      (variant payload)  │
//! │        ├── Electronics { warranty_years, brand }               │
//! │        ├── Grocery     { expiry_date }                         │
//! │        └── Clothing    { size, material }                      │
//! │                                                                │
//! │  ProductType = the tag alone (search keys, wire discriminator) │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! `ProductKind` is internally tagged and flattened into `Product`, so a
//! record serializes flat:
//! ```json
//! { "id": "E1", "name": "TV", "price": 499.99, "quantity_in_stock": 5,
//!   "type": "Electronics", "warranty_years": 2, "brand": "Sony" }
//! ```
//! The `type` discriminator selects the variant on deserialization; a value
//! outside {Electronics, Grocery, Clothing} is a decode error.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::validation;

// =============================================================================
// Product Type Tag
// =============================================================================

/// The variant tag without its payload.
///
/// Used as the search-by-type key and as the `type` discriminator value in
/// the persisted form. Parses case-insensitively ("grocery", "GROCERY", and
/// "Grocery" all work).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Electronics,
    Grocery,
    Clothing,
}

impl ProductType {
    /// Returns the tag as a string (the wire discriminator spelling).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Electronics => "Electronics",
            ProductType::Grocery => "Grocery",
            ProductType::Clothing => "Clothing",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electronics" => Ok(ProductType::Electronics),
            "grocery" => Ok(ProductType::Grocery),
            "clothing" => Ok(ProductType::Clothing),
            other => Err(InventoryError::invalid_argument(format!(
                "unknown product type '{}' (expected Electronics, Grocery, or Clothing)",
                other
            ))),
        }
    }
}

// =============================================================================
// Variant Payloads
// =============================================================================

/// Variant-specific fields, tagged by `type` on the wire.
///
/// The variant set is closed; all dispatch is by pattern matching here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProductKind {
    Electronics { warranty_years: u32, brand: String },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

impl ProductKind {
    /// Returns the tag for this variant.
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductKind::Electronics { .. } => ProductType::Electronics,
            ProductKind::Grocery { .. } => ProductType::Grocery,
            ProductKind::Clothing { .. } => ProductType::Clothing,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// ## Invariants
/// - `price` is finite and non-negative (checked at construction and again
///   when records are loaded from a file)
/// - `quantity_in_stock` is never negative (`u32`)
/// - stock changes only through [`Product::restock`] and [`Product::sell`];
///   fields are private and read through accessors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    quantity_in_stock: u32,
    #[serde(flatten)]
    kind: ProductKind,
}

impl Product {
    /// Creates a product after validating the price.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        kind: ProductKind,
    ) -> InventoryResult<Self> {
        validation::validate_price(price)?;
        Ok(Product {
            id: id.into(),
            name: name.into(),
            price,
            quantity_in_stock,
            kind,
        })
    }

    /// Creates an Electronics product.
    pub fn electronics(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        warranty_years: u32,
        brand: impl Into<String>,
    ) -> InventoryResult<Self> {
        Product::new(
            id,
            name,
            price,
            quantity_in_stock,
            ProductKind::Electronics {
                warranty_years,
                brand: brand.into(),
            },
        )
    }

    /// Creates a Grocery product.
    pub fn grocery(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        expiry_date: NaiveDate,
    ) -> InventoryResult<Self> {
        Product::new(
            id,
            name,
            price,
            quantity_in_stock,
            ProductKind::Grocery { expiry_date },
        )
    }

    /// Creates a Clothing product.
    pub fn clothing(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: u32,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> InventoryResult<Self> {
        Product::new(
            id,
            name,
            price,
            quantity_in_stock,
            ProductKind::Clothing {
                size: size.into(),
                material: material.into(),
            },
        )
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Returns the variant tag.
    pub fn product_type(&self) -> ProductType {
        self.kind.product_type()
    }

    // =========================================================================
    // Stock Operations
    // =========================================================================

    /// Increases stock by `amount`.
    ///
    /// ## Rules
    /// - `amount` must be greater than zero
    /// - the new quantity must fit the stock counter
    ///
    /// Stock is unchanged when an error is returned.
    pub fn restock(&mut self, amount: u32) -> InventoryResult<()> {
        if amount == 0 {
            return Err(InventoryError::invalid_argument(
                "restock amount must be greater than zero",
            ));
        }

        match self.quantity_in_stock.checked_add(amount) {
            Some(new_quantity) => {
                self.quantity_in_stock = new_quantity;
                Ok(())
            }
            None => Err(InventoryError::invalid_argument(format!(
                "restock amount {} would overflow the stock counter for product '{}'",
                amount, self.id
            ))),
        }
    }

    /// Decreases stock by `quantity`.
    ///
    /// ## Rules
    /// - `quantity` must be greater than zero
    /// - `quantity` must not exceed the current stock
    ///
    /// Stock is unchanged when an error is returned.
    pub fn sell(&mut self, quantity: u32) -> InventoryResult<()> {
        if quantity == 0 {
            return Err(InventoryError::invalid_argument(
                "sell quantity must be greater than zero",
            ));
        }

        if quantity > self.quantity_in_stock {
            return Err(InventoryError::InsufficientStock {
                id: self.id.clone(),
                requested: quantity,
                available: self.quantity_in_stock,
            });
        }

        self.quantity_in_stock -= quantity;
        Ok(())
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    /// Returns price × quantity_in_stock.
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity_in_stock)
    }

    /// Whether this product has passed its expiry date.
    ///
    /// Only Grocery products can expire; the check compares the stored
    /// expiry date against the local calendar date on every call (a product
    /// expiring today is not yet expired). Always false for Electronics and
    /// Clothing.
    pub fn is_expired(&self) -> bool {
        match &self.kind {
            ProductKind::Grocery { expiry_date } => *expiry_date < Local::now().date_naive(),
            _ => false,
        }
    }
}

/// One-line human-readable description, variant fields included.
///
/// ```text
/// [Electronics] ID: E1, Name: TV, Price: $499.99, Stock: 5, Brand: Sony, Warranty: 2 years
/// [Grocery] ID: G1, Name: Milk, Price: $2.50, Stock: 10, Expiry Date: 2030-01-01, Status: Not Expired
/// [Clothing] ID: C1, Name: Shirt, Price: $19.99, Stock: 25, Size: M, Material: Cotton
/// ```
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ID: {}, Name: {}, Price: ${:.2}, Stock: {}",
            self.product_type(),
            self.id,
            self.name,
            self.price,
            self.quantity_in_stock
        )?;

        match &self.kind {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => write!(f, ", Brand: {}, Warranty: {} years", brand, warranty_years),
            ProductKind::Grocery { expiry_date } => {
                let status = if self.is_expired() {
                    "Expired"
                } else {
                    "Not Expired"
                };
                write!(f, ", Expiry Date: {}, Status: {}", expiry_date, status)
            }
            ProductKind::Clothing { size, material } => {
                write!(f, ", Size: {}, Material: {}", size, material)
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

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_restock_increases_stock() {
        let mut product = Product::electronics("E1", "TV", 499.99, 5, 2, "Sony").unwrap();
        product.restock(3).unwrap();
        assert_eq!(product.quantity_in_stock(), 8);
    }

    #[test]
    fn test_restock_zero_rejected() {
        let mut product = Product::electronics("E1", "TV", 499.99, 5, 2, "Sony").unwrap();
        let err = product.restock(0).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidArgument { .. }));
        assert_eq!(product.quantity_in_stock(), 5);
    }

    #[test]
    fn test_restock_overflow_rejected() {
        let mut product =
            Product::electronics("E1", "TV", 499.99, u32::MAX - 1, 2, "Sony").unwrap();
        let err = product.restock(5).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidArgument { .. }));
        assert_eq!(product.quantity_in_stock(), u32::MAX - 1);
    }

    #[test]
    fn test_sell_decreases_stock() {
        let mut product = Product::clothing("C1", "Shirt", 19.99, 25, "M", "Cotton").unwrap();
        product.sell(10).unwrap();
        assert_eq!(product.quantity_in_stock(), 15);
    }

    #[test]
    fn test_sell_zero_rejected() {
        let mut product = Product::clothing("C1", "Shirt", 19.99, 25, "M", "Cotton").unwrap();
        let err = product.sell(0).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidArgument { .. }));
        assert_eq!(product.quantity_in_stock(), 25);
    }

    #[test]
    fn test_sell_insufficient_stock_preserves_quantity() {
        let mut product = Product::grocery("G1", "Milk", 2.5, 3, date(2030, 1, 1)).unwrap();
        let err = product.sell(5).unwrap_err();

        match err {
            InventoryError::InsufficientStock {
                id,
                requested,
                available,
            } => {
                assert_eq!(id, "G1");
                assert_eq!(requested, 5);
                assert_eq!(available, 3);
            }
            other => panic!("Expected InsufficientStock, got {:?}", other),
        }
        assert_eq!(product.quantity_in_stock(), 3);
    }

    #[test]
    fn test_restock_then_sell_round_trip() {
        let mut product = Product::electronics("E1", "TV", 499.99, 7, 2, "Sony").unwrap();

        for amount in [1u32, 4, 19, 250] {
            product.restock(amount).unwrap();
            product.sell(amount).unwrap();
            assert_eq!(product.quantity_in_stock(), 7);
        }
    }

    #[test]
    fn test_total_value() {
        let product = Product::grocery("G1", "Milk", 10.0, 3, date(2030, 1, 1)).unwrap();
        assert_eq!(product.total_value(), 30.0);

        let empty = Product::grocery("G2", "Eggs", 4.25, 0, date(2030, 1, 1)).unwrap();
        assert_eq!(empty.total_value(), 0.0);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Product::electronics("E1", "TV", -1.0, 5, 2, "Sony").unwrap_err();
        assert!(matches!(err, InventoryError::InvalidArgument { .. }));

        let err = Product::electronics("E1", "TV", f64::NAN, 5, 2, "Sony").unwrap_err();
        assert!(matches!(err, InventoryError::InvalidArgument { .. }));
    }

    #[test]
    fn test_is_expired() {
        let past = Product::grocery("G1", "Milk", 2.5, 10, date(2000, 1, 1)).unwrap();
        assert!(past.is_expired());

        let future = Product::grocery("G2", "Cheese", 5.0, 10, date(9999, 12, 31)).unwrap();
        assert!(!future.is_expired());

        // Expiring today means still sellable
        let today = Local::now().date_naive();
        let expires_today = Product::grocery("G3", "Bread", 1.5, 10, today).unwrap();
        assert!(!expires_today.is_expired());

        let electronics = Product::electronics("E1", "TV", 499.99, 5, 2, "Sony").unwrap();
        assert!(!electronics.is_expired());
    }

    #[test]
    fn test_product_type_parsing() {
        assert_eq!(
            "electronics".parse::<ProductType>().unwrap(),
            ProductType::Electronics
        );
        assert_eq!(
            "GROCERY".parse::<ProductType>().unwrap(),
            ProductType::Grocery
        );
        assert_eq!(
            " Clothing ".parse::<ProductType>().unwrap(),
            ProductType::Clothing
        );
        assert!("Unknown".parse::<ProductType>().is_err());
        assert!("".parse::<ProductType>().is_err());
    }

    #[test]
    fn test_display_electronics() {
        let product = Product::electronics("E1", "TV", 499.99, 5, 2, "Sony").unwrap();
        assert_eq!(
            product.to_string(),
            "[Electronics] ID: E1, Name: TV, Price: $499.99, Stock: 5, Brand: Sony, Warranty: 2 years"
        );
    }

    #[test]
    fn test_display_grocery() {
        let expired = Product::grocery("G1", "Milk", 2.5, 10, date(2020, 5, 1)).unwrap();
        assert_eq!(
            expired.to_string(),
            "[Grocery] ID: G1, Name: Milk, Price: $2.50, Stock: 10, Expiry Date: 2020-05-01, Status: Expired"
        );

        let fresh = Product::grocery("G2", "Cheese", 5.0, 4, date(9999, 12, 31)).unwrap();
        assert_eq!(
            fresh.to_string(),
            "[Grocery] ID: G2, Name: Cheese, Price: $5.00, Stock: 4, Expiry Date: 9999-12-31, Status: Not Expired"
        );
    }

    #[test]
    fn test_display_clothing() {
        let product = Product::clothing("C1", "Shirt", 19.99, 25, "M", "Cotton").unwrap();
        assert_eq!(
            product.to_string(),
            "[Clothing] ID: C1, Name: Shirt, Price: $19.99, Stock: 25, Size: M, Material: Cotton"
        );
    }

    #[test]
    fn test_serialized_record_is_flat_and_tagged() {
        let product = Product::electronics("E1", "TV", 499.99, 5, 2, "Sony").unwrap();
        let json = serde_json::to_string(&product).unwrap();

        assert!(json.contains("\"type\":\"Electronics\""));
        assert!(json.contains("\"id\":\"E1\""));
        assert!(json.contains("\"quantity_in_stock\":5"));
        assert!(json.contains("\"warranty_years\":2"));
        // Variant fields sit at the top level, not nested under a payload key
        assert!(!json.contains("\"kind\""));
    }
}
