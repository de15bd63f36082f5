//! # Inventory Codec
//!
//! Converts an [`Inventory`] to and from its persisted JSON form.
//!
//! ## Wire Format
//! A JSON array, one flat record per product, discriminated by `type`:
//! ```json
//! [
//!   {
//!     "id": "G1",
//!     "name": "Milk",
//!     "price": 2.5,
//!     "quantity_in_stock": 10,
//!     "type": "Grocery",
//!     "expiry_date": "2030-01-01"
//!   }
//! ]
//! ```
//! Files are written pretty-printed. Record order is the inventory's listing
//! order, so save/load round-trips preserve it.
//!
//! ## Load Policy: All or Nothing
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  from_json(text)                                               │
//! │       │                                                        │
//! │       ├── malformed JSON ──────────────► InvalidProductData    │
//! │       ├── unknown "type" value ────────► InvalidProductData    │
//! │       ├── missing/mistyped field ──────► InvalidProductData    │
//! │       ├── negative price ──────────────► InvalidProductData    │
//! │       ├── duplicate id in the file ────► InvalidProductData    │
//! │       │                                                        │
//! │       └── every record clean ──────────► fresh Inventory       │
//! │                                                                │
//! │  A single bad record fails the whole load; no partial          │
//! │  inventory is ever returned. The caller's existing inventory   │
//! │  is a separate value and stays untouched on failure.           │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use stockroom_core::{validation, Inventory, InventoryError, Product};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Pure Codec
// =============================================================================

/// Serializes the inventory as a pretty-printed JSON array.
///
/// One record per product, in listing order, round-trippable via
/// [`from_json`].
pub fn to_json(inventory: &Inventory) -> StoreResult<String> {
    let records = inventory.list_all_products();
    let json = serde_json::to_string_pretty(&records)?;
    Ok(json)
}

/// Rebuilds an inventory from its serialized form.
///
/// Each record's `type` discriminator selects the variant before the rest
/// of the fields are decoded; prices are re-validated after decoding since
/// the file is outside the constructor's control. Any failure aborts the
/// whole load with `InvalidProductData`.
pub fn from_json(json: &str) -> StoreResult<Inventory> {
    let products: Vec<Product> =
        serde_json::from_str(json).map_err(|err| InventoryError::invalid_data(err.to_string()))?;

    let mut inventory = Inventory::new();
    for product in products {
        validation::validate_price(product.price()).map_err(|_| {
            InventoryError::invalid_data(format!(
                "invalid price {} for product '{}'",
                product.price(),
                product.id()
            ))
        })?;

        inventory.add_product(product).map_err(|err| match err {
            InventoryError::DuplicateProductId { id } => {
                InventoryError::invalid_data(format!("duplicate product id '{}' in file", id))
            }
            other => other,
        })?;
    }

    Ok(inventory)
}

// =============================================================================
// File Wrappers
// =============================================================================

/// Writes the inventory to `path`, replacing any existing file.
pub fn save_to_file(inventory: &Inventory, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    let json = to_json(inventory)?;

    fs::write(path, json).map_err(|source| StoreError::write_file(path, source))?;

    debug!(path = %path.display(), products = inventory.len(), "Inventory saved");
    Ok(())
}

/// Reads and decodes the inventory file at `path`.
///
/// Returns a fresh [`Inventory`] on success. Read failures surface as
/// `StoreError::ReadFile`; decode failures as `InvalidProductData`.
pub fn load_from_file(path: impl AsRef<Path>) -> StoreResult<Inventory> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| StoreError::read_file(path, source))?;

    let inventory = from_json(&json)?;

    debug!(path = %path.display(), products = inventory.len(), "Inventory loaded");
    Ok(inventory)
}

// =============================================================================
// Unit Tests
// =============================================================================
