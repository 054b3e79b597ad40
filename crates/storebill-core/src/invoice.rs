//! # Invoice Rendering
//!
//! Renders a ledger into the textual invoice document.
//!
//! ## The Template Is the Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  === INVOICE ===                                                        │
//! │  Date: 3/7/2024                                                         │
//! │  Invoice #: 1709812800000                                               │
//! │                                                                         │
//! │  Products:                                                              │
//! │  1. Pen                                                                 │
//! │     Price: $2.50 x 3 = $7.50                                            │
//! │  2. Notebook                                                            │
//! │     Price: $5.00 x 2 = $10.00                                           │
//! │                                                                         │
//! │  ---                                                                    │
//! │  Subtotal: $17.50                                                       │
//! │  Tax (10%): $1.75                                                       │
//! │  Discount (5%): -$0.88                                                  │
//! │  TOTAL: $18.38                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Downstream consumers may parse or display this text verbatim, so the
//! shape above (including the blank line before `---` and the trailing
//! newline) must be reproduced byte-for-byte.

use chrono::{DateTime, Utc};

use crate::clock::TimeSource;
use crate::error::InvoiceError;
use crate::ledger::BillingLedger;
use crate::money::{format_rate, format_usd};

/// US short date, no zero padding: `3/7/2024`.
const DATE_FORMAT: &str = "%-m/%-d/%Y";

impl BillingLedger {
    /// Renders the invoice document for the current ledger state.
    ///
    /// The current date and the invoice number are both derived from a
    /// single `clock.now()` call: the date line is its calendar date, the
    /// invoice number its epoch-millisecond value.
    ///
    /// ## Errors
    /// [`InvoiceError::EmptyLedger`] when there is nothing to invoice.
    pub fn generate_invoice(&self, clock: &dyn TimeSource) -> Result<String, InvoiceError> {
        if self.is_empty() {
            return Err(InvoiceError::EmptyLedger);
        }

        Ok(render(self, clock.now()))
    }
}

/// Renders the invoice text for a non-empty ledger at the given instant.
fn render(ledger: &BillingLedger, now: DateTime<Utc>) -> String {
    let summary = ledger.summary();

    let mut out = String::new();
    out.push_str("=== INVOICE ===\n");
    out.push_str(&format!("Date: {}\n", now.format(DATE_FORMAT)));
    out.push_str(&format!("Invoice #: {}\n\n", now.timestamp_millis()));

    out.push_str("Products:\n");
    for (index, item) in ledger.items().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, item.name));
        out.push_str(&format!(
            "   Price: {} x {} = {}\n",
            format_usd(item.unit_price),
            item.quantity,
            format_usd(item.line_total())
        ));
    }

    out.push_str("\n---\n");
    out.push_str(&format!("Subtotal: {}\n", format_usd(summary.subtotal)));
    out.push_str(&format!(
        "Tax ({}%): {}\n",
        format_rate(ledger.tax_rate_percent()),
        format_usd(summary.tax_amount)
    ));
    out.push_str(&format!(
        "Discount ({}%): -{}\n",
        format_rate(ledger.discount_rate_percent()),
        format_usd(summary.discount_amount)
    ));
    out.push_str(&format!("TOTAL: {}\n", format_usd(summary.total)));

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
