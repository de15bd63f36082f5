//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! The product hierarchy and the inventory container, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                    Stockroom Architecture                      │
//! │                                                                │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                  apps/cli (menu loop)                    │  │
//! │  │    prompts ──► parse ──► dispatch ──► print result       │  │
//! │  └───────────────────────────┬──────────────────────────────┘  │
//! │                              │                                 │
//! │  ┌───────────────────────────▼──────────────────────────────┐  │
//! │  │              ★ stockroom-core (THIS CRATE) ★             │  │
//! │  │                                                          │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐           │  │
//! │  │   │  product  │  │ inventory │  │ validation │           │  │
//! │  │   │  Product  │  │ Inventory │  │   rules    │           │  │
//! │  │   │  variants │  │  id map   │  │   checks   │           │  │
//! │  │   └───────────┘  └───────────┘  └────────────┘           │  │
//! │  │                                                          │  │
//! │  │   NO FILES • NO NETWORK • NO LOGGING                     │  │
//! │  └───────────────────────────┬──────────────────────────────┘  │
//! │                              │                                 │
//! │  ┌───────────────────────────▼──────────────────────────────┐  │
//! │  │            stockroom-store (persistence layer)           │  │
//! │  │          JSON codec, inventory file save/load            │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The `Product` record and its three variants
//! - [`inventory`] - The id-keyed `Inventory` container
//! - [`validation`] - Boundary checks for ids, names, prices, dates
//! - [`error`] - The domain error enum
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, Product};
//!
//! let mut inventory = Inventory::new();
//! let tv = Product::electronics("E1", "TV", 499.99, 5, 2, "Sony")?;
//! inventory.add_product(tv)?;
//!
//! inventory.sell_product("E1", 2)?;
//! assert_eq!(inventory.get("E1").unwrap().quantity_in_stock(), 3);
//! # Ok::<(), stockroom_core::InventoryError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Inventory` instead of
// `use stockroom_core::inventory::Inventory`

pub use error::{InventoryError, InventoryResult};
pub use inventory::Inventory;
pub use product::{Product, ProductKind, ProductType};
