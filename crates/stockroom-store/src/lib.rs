//! # stockroom-store: Persistence for Stockroom
//!
//! Owns the JSON codec for [`stockroom_core::Inventory`] and the file
//! wrappers around it. The core crate never touches a file; the CLI never
//! touches JSON; everything in between lives here.
//!
//! ## Modules
//!
//! - [`codec`] - `to_json`/`from_json` plus `save_to_file`/`load_from_file`
//! - [`error`] - `StoreError` wrapping the core error with file variants
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, Product};
//! use stockroom_store::{from_json, to_json};
//!
//! let mut inventory = Inventory::new();
//! let shirt = Product::clothing("C1", "Shirt", 19.99, 25, "M", "Cotton")?;
//! inventory.add_product(shirt)?;
//!
//! let json = to_json(&inventory)?;
//! let reloaded = from_json(&json)?;
//! assert_eq!(reloaded, inventory);
//! # Ok::<(), stockroom_store::StoreError>(())
//! ```

pub mod codec;
pub mod error;

pub use codec::{from_json, load_from_file, save_to_file, to_json};
pub use error::{StoreError, StoreResult};
