//! # Validation Module
//!
//! Input validation for values crossing into the domain: ids and names typed
//! at the prompt, prices from the prompt or a loaded file, expiry dates in
//! `YYYY-MM-DD` form.
//!
//! Construction ([`crate::Product::new`]) validates the price itself; the
//! other checks run at the application boundary before a product is built.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_price, parse_expiry_date};
//!
//! validate_price(2.5).unwrap();
//! let date = parse_expiry_date("2030-01-01").unwrap();
//! assert_eq!(date.to_string(), "2030-01-01");
//! ```

use chrono::NaiveDate;

use crate::error::{InventoryError, InventoryResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_product_id(id: &str) -> InventoryResult<()> {
    if id.trim().is_empty() {
        return Err(InventoryError::invalid_argument(
            "product id must not be empty",
        ));
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_product_name(name: &str) -> InventoryResult<()> {
    if name.trim().is_empty() {
        return Err(InventoryError::invalid_argument(
            "product name must not be empty",
        ));
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be a finite number (NaN and infinities rejected)
/// - Must be non-negative; zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-2.5).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> InventoryResult<()> {
    if !price.is_finite() {
        return Err(InventoryError::invalid_argument(
            "price must be a finite number",
        ));
    }

    if price < 0.0 {
        return Err(InventoryError::invalid_argument(
            "price must not be negative",
        ));
    }

    Ok(())
}

// =============================================================================
// Date Parsing
// =============================================================================

/// Parses an expiry date in ISO `YYYY-MM-DD` form.
///
/// Surrounding whitespace is ignored. Calendar validity is enforced
/// (no month 13, no February 30th).
pub fn parse_expiry_date(input: &str) -> InventoryResult<NaiveDate> {
    let input = input.trim();

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        InventoryError::invalid_argument(format!(
            "invalid expiry date '{}' (expected YYYY-MM-DD)",
            input
        ))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("E1").is_ok());
        assert!(validate_product_id("  G1  ").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Whole Milk").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("  ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(2.5).is_ok());
        assert!(validate_price(499.99).is_ok());

        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_expiry_date() {
        let date = parse_expiry_date("2030-06-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2030, 6, 15).unwrap());

        assert!(parse_expiry_date(" 2030-06-15 ").is_ok());

        assert!(parse_expiry_date("2030-13-01").is_err());
        assert!(parse_expiry_date("2030-02-30").is_err());
        assert!(parse_expiry_date("15/06/2030").is_err());
        assert!(parse_expiry_date("tomorrow").is_err());
        assert!(parse_expiry_date("").is_err());
    }
}
