//! # Validation Module
//!
//! Raw-text input validation for Storebill.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end (CLI / GUI)                                        │
//! │  ├── Tokenizes user input into name / price / quantity fields          │
//! │  └── Immediate feedback for command syntax errors                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trims and checks the name                                         │
//! │  ├── Parses price text to a finite positive decimal                    │
//! │  └── Parses quantity text to a positive integer                        │
//! │                                                                         │
//! │  The ledger only ever sees values that passed Layer 2, so the          │
//! │  LineItem invariants hold by construction.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storebill_core::validation::{parse_price, parse_quantity, validate_name};
//!
//! assert_eq!(validate_name("  Pen  ").unwrap(), "Pen");
//! assert_eq!(parse_price("2.50").unwrap(), 2.5);
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Name Validation
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming surrounding whitespace
///
/// ## Returns
/// The trimmed name.
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Parsing
// =============================================================================

/// Parses a price from raw text.
///
/// ## Rules
/// - Must parse as a decimal number (after trimming)
/// - Must be finite (no `inf`/`NaN`)
/// - Must be strictly positive
///
/// ## Example
/// ```rust
/// use storebill_core::validation::parse_price;
///
/// assert_eq!(parse_price("2.50").unwrap(), 2.5);
/// assert!(parse_price("0").is_err());
/// assert!(parse_price("-1.50").is_err());
/// assert!(parse_price("abc").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<f64> {
    let invalid = || ValidationError::InvalidPrice {
        input: input.to_string(),
    };

    let price: f64 = input.trim().parse().map_err(|_| invalid())?;

    if !price.is_finite() || price <= 0.0 {
        return Err(invalid());
    }

    Ok(price)
}

/// Parses a quantity from raw text.
///
/// ## Rules
/// - Must parse as a whole number (after trimming); `"3.5"` is rejected,
///   not truncated
/// - Must be strictly positive
///
/// ## Example
/// ```rust
/// use storebill_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("3").unwrap(), 3);
/// assert!(parse_quantity("0").is_err());
/// assert!(parse_quantity("2.5").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let invalid = || ValidationError::InvalidQuantity {
        input: input.to_string(),
    };

    let quantity: i64 = input.trim().parse().map_err(|_| invalid())?;

    if quantity <= 0 {
        return Err(invalid());
    }

    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
