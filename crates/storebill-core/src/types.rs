//! # Domain Types
//!
//! Core domain types for a billing session.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌───────────────────────┐                  │
//! │  │    LineItem     │        │   FinancialSummary    │                  │
//! │  │  ─────────────  │        │  ───────────────────  │                  │
//! │  │  id (UUID)      │  Σ───► │  subtotal             │                  │
//! │  │  name           │        │  tax_amount           │                  │
//! │  │  unit_price     │        │  discount_amount      │                  │
//! │  │  quantity       │        │  total                │                  │
//! │  │                 │        │  (derived, not stored)│                  │
//! │  └─────────────────┘        └───────────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every line item gets a UUID v4 at creation. The id is opaque, immutable,
//! and exists only so the caller can point at an item for removal.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the current billing session.
///
/// ## Invariants (enforced at construction via [`crate::ledger::BillingLedger::add_item`])
/// - `name` is non-empty after trimming
/// - `unit_price` is finite and > 0
/// - `quantity` is > 0
///
/// Line items are never mutated in place: they are created by `add_item`
/// and destroyed by `remove_item` or `clear`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique identifier (UUID v4), used only for removal lookup.
    pub id: Uuid,

    /// Product name as entered, with surrounding whitespace trimmed.
    pub name: String,

    /// Price per unit in the session currency.
    pub unit_price: f64,

    /// Quantity purchased.
    pub quantity: i64,
}

impl LineItem {
    /// Calculates the line total (unit price × quantity), unrounded.
    #[inline]
    pub fn line_total(&self) -> f64 {
        money::line_total(self.unit_price, self.quantity)
    }
}

// =============================================================================
// Financial Summary
// =============================================================================

/// Derived totals for the current ledger state.
///
/// ## Freshness
/// A summary is recomputed from the line-item sequence on every query and is
/// never cached, so it is always consistent with the ledger that produced it.
///
/// ## Precision
/// All fields are unrounded f64 values. Two-decimal rounding happens only
/// when an amount is formatted for display (see [`crate::money::format_usd`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Sum of all line totals, before adjustments.
    pub subtotal: f64,

    /// `subtotal × tax_rate_percent / 100`.
    pub tax_amount: f64,

    /// `subtotal × discount_rate_percent / 100`.
    pub discount_amount: f64,

    /// `subtotal + tax_amount − discount_amount`.
    pub total: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(unit_price: f64, quantity: i64) -> LineItem {
        LineItem {
            id: Uuid::new_v4(),
            name: "Test Item".to_string(),
            unit_price,
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(test_item(2.5, 3).line_total(), 7.5);
        assert_eq!(test_item(5.0, 2).line_total(), 10.0);
    }

    #[test]
    fn test_summary_default_is_all_zero() {
        let summary = FinancialSummary::default();
        assert_eq!(summary.subtotal, 0.0);
        assert_eq!(summary.tax_amount, 0.0);
        assert_eq!(summary.discount_amount, 0.0);
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn test_line_item_serializes_camel_case() {
        let item = test_item(1.5, 2);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("unitPrice").is_some());
        assert!(json.get("unit_price").is_none());
    }
}
