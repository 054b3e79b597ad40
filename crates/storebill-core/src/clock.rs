//! # Clock Abstraction
//!
//! The core never reads ambient system time. Invoice generation takes a
//! [`TimeSource`] so that the invoice date and number are deterministic
//! under test and the decision of *which* clock to use stays with the
//! caller.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Production:  generate_invoice(&SystemClock)   → wall-clock time        │
//! │  Tests:       generate_invoice(&FixedClock)    → pinned instant         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};

/// Source of the current instant for invoice generation.
///
/// One instant drives both invoice fields: the date line is the calendar
/// date of `now()`, and the invoice number is its epoch-millisecond value
/// (unique within a session as long as invoices are not generated twice in
/// the same millisecond, which a single interaction stream cannot do).
pub trait TimeSource {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The production clock: reads the operating system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
