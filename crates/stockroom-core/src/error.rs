//! # Error Types
//!
//! Domain errors for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  stockroom-core errors (this file)                             │
//! │  └── InventoryError   - domain rule violations, bad input      │
//! │                                                                │
//! │  stockroom-store errors (separate crate)                       │
//! │  └── StoreError       - wraps InventoryError, adds file I/O    │
//! │                                                                │
//! │  Flow: InventoryError → StoreError → CLI prints and continues  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable: the caller reports it and carries on.
//! Errors carry the offending id or quantities so messages are actionable
//! without extra lookups.

use thiserror::Error;

// =============================================================================
// Inventory Error
// =============================================================================

/// Errors raised by the product hierarchy and the inventory container.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// An insert collided with an existing product id.
    ///
    /// The mapping is left exactly as it was; the rejected product is
    /// dropped by the caller.
    #[error("A product with id '{id}' already exists in the inventory")]
    DuplicateProductId { id: String },

    /// Lookup by id found nothing.
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    /// A sale asked for more units than are in stock.
    ///
    /// Carries both sides of the comparison so the caller can show
    /// "requested 5, available 3" without a second lookup. Stock is
    /// untouched when this is returned.
    #[error("Insufficient stock for product {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: String,
        requested: u32,
        available: u32,
    },

    /// An operation argument failed validation (zero quantity, negative
    /// price, malformed date, blank id).
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A persisted record could not be decoded or failed validation.
    ///
    /// Produced by the store layer during load; defined here so the whole
    /// system shares one error vocabulary.
    #[error("Invalid product data: {reason}")]
    InvalidProductData { reason: String },
}

impl InventoryError {
    /// Creates a DuplicateProductId error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        InventoryError::DuplicateProductId { id: id.into() }
    }

    /// Creates a ProductNotFound error.
    pub fn not_found(id: impl Into<String>) -> Self {
        InventoryError::ProductNotFound { id: id.into() }
    }

    /// Creates an InvalidArgument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        InventoryError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an InvalidProductData error.
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        InventoryError::InvalidProductData {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with InventoryError.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================
