//! # Money Formatting Module
//!
//! Display-time formatting for monetary amounts and percentage rates.
//!
//! ## Rounding Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ROUND AT THE EDGE, NEVER IN BETWEEN                                    │
//! │                                                                         │
//! │  Internal arithmetic keeps full f64 precision:                          │
//! │    subtotal = 17.50, discount = 0.875, total = 18.375                   │
//! │                                                                         │
//! │  Rounding to two decimals happens ONLY when an amount is turned into    │
//! │  text for display ("0.88", "18.38"). Rounding between arithmetic steps  │
//! │  would compound error across the pipeline.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storebill_core::money::{format_usd, line_total};
//!
//! assert_eq!(format_usd(2.5), "$2.50");
//! assert_eq!(line_total(2.5, 3), 7.5);
//! ```

// =============================================================================
// Line Arithmetic
// =============================================================================

/// Calculates a line total (unit price × quantity), unrounded.
#[inline]
pub fn line_total(unit_price: f64, quantity: i64) -> f64 {
    unit_price * quantity as f64
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Formats an amount as a dollar string with exactly two decimals.
///
/// The sign, when present, sits between `$` and the digits (`$-2.50`),
/// because the amount is substituted verbatim into the invoice template
/// after the currency symbol.
///
/// ## Example
/// ```rust
/// use storebill_core::money::format_usd;
///
/// assert_eq!(format_usd(10.99), "$10.99");
/// assert_eq!(format_usd(0.875), "$0.88");
/// assert_eq!(format_usd(0.0), "$0.00");
/// ```
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Formats a percentage rate the way a user would have typed it.
///
/// Whole-number rates drop the fractional part (`10`, not `10.0`), fractional
/// rates print in full (`8.25`). Rates are not validated anywhere, so this
/// must also cope with negative and out-of-range values.
///
/// ## Example
/// ```rust
/// use storebill_core::money::format_rate;
///
/// assert_eq!(format_rate(10.0), "10");
/// assert_eq!(format_rate(8.25), "8.25");
/// assert_eq!(format_rate(-5.0), "-5");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate.is_finite() && rate.fract() == 0.0 {
        format!("{}", rate as i64)
    } else {
        format!("{}", rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
