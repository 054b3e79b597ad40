//! # storebill-core: Pure Business Logic for Storebill
//!
//! This crate is the **heart** of Storebill. It contains all billing logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storebill Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Front-end (CLI / any GUI)                     │   │
//! │  │    Add Form ──► Item List ──► Rate Inputs ──► Invoice View     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw text in, values/errors out         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ storebill-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  ledger   │  │  invoice  │  │ validation│  │   │
//! │  │   │ LineItem  │  │ Billing-  │  │ rendering │  │   rules   │  │   │
//! │  │   │  Summary  │  │  Ledger   │  │ TimeSource│  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO AMBIENT CLOCK • NO LOGGING • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, FinancialSummary)
//! - [`ledger`] - The BillingLedger aggregate (mutations and queries)
//! - [`invoice`] - Invoice text rendering with an injected clock
//! - [`clock`] - The TimeSource abstraction and its system implementation
//! - [`money`] - Display-time monetary formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Raw-text input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: `summary()` and invoice rendering are deterministic
//!    given the ledger state and the injected clock
//! 2. **No I/O**: the clock is a trait, never `Utc::now()` inside the core
//! 3. **Explicit Errors**: all failures are typed values, never panics
//! 4. **No Partial Mutation**: a failed `add_item` leaves the ledger untouched
//!
//! ## Example Usage
//!
//! ```rust
//! use storebill_core::{BillingLedger, SystemClock};
//!
//! let mut ledger = BillingLedger::new();
//! ledger.set_tax_rate(10.0);
//! ledger.set_discount_rate(5.0);
//!
//! ledger.add_item("Pen", "2.50", "3").unwrap();
//! ledger.add_item("Notebook", "5.00", "2").unwrap();
//!
//! let summary = ledger.summary();
//! assert_eq!(summary.subtotal, 17.50);
//!
//! let invoice = ledger.generate_invoice(&SystemClock).unwrap();
//! assert!(invoice.starts_with("=== INVOICE ==="));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod invoice;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storebill_core::BillingLedger` instead of
// `use storebill_core::ledger::BillingLedger`

pub use clock::{SystemClock, TimeSource};
pub use error::{BillingError, InvoiceError, ValidationError};
pub use ledger::BillingLedger;
pub use types::{FinancialSummary, LineItem};
