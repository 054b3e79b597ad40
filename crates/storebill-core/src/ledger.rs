//! # Billing Ledger
//!
//! The mutable aggregate for one billing session.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Front-end Action          Ledger Call             State Change         │
//! │  ────────────────          ───────────             ────────────         │
//! │                                                                         │
//! │  Submit add form ────────► add_item() ───────────► items.push(item)    │
//! │                                                                         │
//! │  Confirm remove ─────────► remove_item(id) ──────► items.retain(...)   │
//! │                                                                         │
//! │  Confirm clear ──────────► clear() ──────────────► items.clear()       │
//! │                                                                         │
//! │  Edit rate field ────────► set_tax_rate() ───────► rate = value        │
//! │                                                                         │
//! │  Render totals ──────────► summary() ────────────► (read only)         │
//! │                                                                         │
//! │  Tap "Generate" ─────────► generate_invoice() ───► (read only)         │
//! │                                                                         │
//! │  NOTE: Confirmation prompts for remove/clear are a caller-side policy.  │
//! │        The ledger mutates unconditionally and synchronously.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! One ledger per active session, exclusively owned by the hosting session
//! context. The ledger is not thread-safe and does not need to be: it is
//! driven by a single interaction stream.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationResult;
use crate::types::{FinancialSummary, LineItem};
use crate::validation::{parse_price, parse_quantity, validate_name};

/// The billing ledger: an ordered sequence of line items plus the two
/// adjustment rates for the session.
///
/// ## Invariants
/// - No two items share an `id` (ids are freshly generated UUIDs)
/// - Insertion order is display and invoice order
/// - Every item satisfies the [`LineItem`] field invariants
///
/// ## Rates
/// `tax_rate_percent` and `discount_rate_percent` are deliberately
/// unvalidated: negative and >100 values are accepted and simply propagate
/// through the arithmetic. Clamping them is a product decision this layer
/// does not take.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingLedger {
    items: Vec<LineItem>,
    tax_rate_percent: f64,
    discount_rate_percent: f64,
}

impl BillingLedger {
    /// Creates a new empty ledger with both rates at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validates raw text input and appends a new line item.
    ///
    /// ## Validation Order
    /// 1. `name` trimmed must be non-empty → [`EmptyName`]
    /// 2. `price_text` must parse to a finite decimal > 0 → [`InvalidPrice`]
    /// 3. `quantity_text` must parse to an integer > 0 → [`InvalidQuantity`]
    ///
    /// All-or-nothing: if any step fails, the ledger is left untouched.
    ///
    /// ## Returns
    /// A clone of the appended item (the ledger keeps ownership of the
    /// stored one).
    ///
    /// [`EmptyName`]: crate::error::ValidationError::EmptyName
    /// [`InvalidPrice`]: crate::error::ValidationError::InvalidPrice
    /// [`InvalidQuantity`]: crate::error::ValidationError::InvalidQuantity
    pub fn add_item(
        &mut self,
        name: &str,
        price_text: &str,
        quantity_text: &str,
    ) -> ValidationResult<LineItem> {
        // Validate everything before touching the sequence
        let name = validate_name(name)?;
        let unit_price = parse_price(price_text)?;
        let quantity = parse_quantity(quantity_text)?;

        let item = LineItem {
            id: Uuid::new_v4(),
            name,
            unit_price,
            quantity,
        };

        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes the item with the given id.
    ///
    /// ## Returns
    /// `true` if an item was removed, `false` if the id was absent
    /// (idempotent no-op, not an error).
    pub fn remove_item(&mut self, id: Uuid) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != initial_len
    }

    /// Removes all items unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replaces the tax rate (percent). Not validated.
    pub fn set_tax_rate(&mut self, value: f64) {
        self.tax_rate_percent = value;
    }

    /// Replaces the discount rate (percent). Not validated.
    pub fn set_discount_rate(&mut self, value: f64) {
        self.discount_rate_percent = value;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the current tax rate (percent).
    #[inline]
    pub fn tax_rate_percent(&self) -> f64 {
        self.tax_rate_percent
    }

    /// Returns the current discount rate (percent).
    #[inline]
    pub fn discount_rate_percent(&self) -> f64 {
        self.discount_rate_percent
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Checks if the ledger has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the financial summary for the current state.
    ///
    /// Pure and side-effect-free: recomputed from scratch on every call,
    /// never cached. Accumulation runs in insertion order for reproducible
    /// floating-point results; no intermediate rounding is applied.
    pub fn summary(&self) -> FinancialSummary {
        let subtotal: f64 = self.items.iter().map(LineItem::line_total).sum();
        let tax_amount = subtotal * self.tax_rate_percent / 100.0;
        let discount_amount = subtotal * self.discount_rate_percent / 100.0;
        let total = subtotal + tax_amount - discount_amount;

        FinancialSummary {
            subtotal,
            tax_amount,
            discount_amount,
            total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn ledger_with_rates(tax: f64, discount: f64) -> BillingLedger {
        let mut ledger = BillingLedger::new();
        ledger.set_tax_rate(tax);
        ledger.set_discount_rate(discount);
        ledger
    }

    #[test]
    fn test_add_item_appends_parsed_fields() {
        let mut ledger = BillingLedger::new();

        let item = ledger.add_item("  Pen  ", "2.50", "3").unwrap();

        assert_eq!(ledger.item_count(), 1);
        assert_eq!(item.name, "Pen");
        assert_eq!(item.unit_price, 2.5);
        assert_eq!(item.quantity, 3);
        assert_eq!(ledger.items()[0], item);
    }

    #[test]
    fn test_add_item_validation_order() {
        let mut ledger = BillingLedger::new();

        // Name is checked first even when price and quantity are also bad
        let err = ledger.add_item("   ", "bad", "bad").unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);

        // Then price, even when quantity is also bad
        let err = ledger.add_item("Pen", "-1", "bad").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPrice { .. }));

        // Then quantity
        let err = ledger.add_item("Pen", "2.50", "0").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidQuantity { .. }));
    }

    #[test]
    fn test_add_item_failure_leaves_ledger_unchanged() {
        let mut ledger = BillingLedger::new();
        ledger.add_item("Pen", "2.50", "3").unwrap();

        assert!(ledger.add_item("", "1.00", "1").is_err());
        assert!(ledger.add_item("Notebook", "0", "1").is_err());
        assert!(ledger.add_item("Notebook", "1.00", "1.5").is_err());

        assert_eq!(ledger.item_count(), 1);
        assert_eq!(ledger.items()[0].name, "Pen");
    }

    #[test]
    fn test_item_ids_are_unique() {
        let mut ledger = BillingLedger::new();
        let a = ledger.add_item("Pen", "1.00", "1").unwrap();
        let b = ledger.add_item("Pen", "1.00", "1").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_remove_item_present() {
        let mut ledger = BillingLedger::new();
        let pen = ledger.add_item("Pen", "2.50", "3").unwrap();
        ledger.add_item("Notebook", "5.00", "2").unwrap();

        assert!(ledger.remove_item(pen.id));
        assert_eq!(ledger.item_count(), 1);
        assert!(ledger.items().iter().all(|item| item.id != pen.id));
    }

    #[test]
    fn test_remove_item_absent_is_noop() {
        let mut ledger = BillingLedger::new();
        ledger.add_item("Pen", "2.50", "3").unwrap();

        assert!(!ledger.remove_item(Uuid::new_v4()));
        assert_eq!(ledger.item_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut ledger = BillingLedger::new();
        ledger.add_item("Pen", "2.50", "3").unwrap();
        ledger.add_item("Notebook", "5.00", "2").unwrap();
        assert!(!ledger.is_empty());

        ledger.clear();
        assert!(ledger.is_empty());

        // Clearing an already-empty ledger is fine
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_summary_two_items_with_tax_and_discount() {
        // Pen $2.50 ×3 + Notebook $5.00 ×2, tax 10%, discount 5%
        let mut ledger = ledger_with_rates(10.0, 5.0);
        ledger.add_item("Pen", "2.50", "3").unwrap();
        ledger.add_item("Notebook", "5.00", "2").unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.subtotal, 17.5);
        assert_eq!(summary.tax_amount, 1.75);
        assert_eq!(summary.discount_amount, 0.875);
        assert_eq!(summary.total, 18.375);
    }

    #[test]
    fn test_summary_empty_ledger_is_all_zero() {
        let ledger = ledger_with_rates(10.0, 5.0);
        let summary = ledger.summary();
        assert_eq!(summary.subtotal, 0.0);
        assert_eq!(summary.tax_amount, 0.0);
        assert_eq!(summary.discount_amount, 0.0);
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn test_summary_is_pure() {
        let mut ledger = ledger_with_rates(8.25, 2.0);
        ledger.add_item("Pen", "2.50", "3").unwrap();

        assert_eq!(ledger.summary(), ledger.summary());
    }

    #[test]
    fn test_summary_permissive_rates() {
        // Negative and >100 rates propagate through the arithmetic untouched
        let mut ledger = ledger_with_rates(-10.0, 150.0);
        ledger.add_item("Pen", "10.00", "1").unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.tax_amount, -1.0);
        assert_eq!(summary.discount_amount, 15.0);
        assert_eq!(
            summary.total,
            summary.subtotal + summary.tax_amount - summary.discount_amount
        );
    }

    #[test]
    fn test_adding_item_increases_subtotal_by_line_total() {
        let mut ledger = BillingLedger::new();
        ledger.add_item("Pen", "2.50", "3").unwrap();
        let before = ledger.summary().subtotal;

        ledger.add_item("Stapler", "7.25", "4").unwrap();
        let after = ledger.summary().subtotal;

        assert!((after - before - 29.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_quantity() {
        let mut ledger = BillingLedger::new();
        ledger.add_item("Pen", "2.50", "3").unwrap();
        ledger.add_item("Notebook", "5.00", "2").unwrap();
        assert_eq!(ledger.total_quantity(), 5);
    }
}
