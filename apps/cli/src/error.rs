//! # Shell Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Storebill                             │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<String, CliError>                                               │
//! │         │                                                               │
//! │         ├── Core validation failed? ── ValidationError ──┐              │
//! │         │                                                │              │
//! │         ├── Nothing to invoice? ────── InvoiceError ──── CliError ──►   │
//! │         │                                                │              │
//! │         ├── Bad command syntax? ────── Usage ────────────┘              │
//! │         │                                                               │
//! │         └── Success ────────────────── rendered output ─────────────►   │
//! │                                                                         │
//! │  The REPL prints `Error: {message}` and keeps running; no error is      │
//! │  fatal, and the ledger is always left in a consistent state.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storebill_core::{BillingError, InvoiceError, ValidationError};
use thiserror::Error;

/// Error returned from shell commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// A ledger operation failed (validation or invoice precondition).
    #[error("{0}")]
    Billing(#[from] BillingError),

    /// The command line did not match the expected syntax.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// A numeric argument did not parse.
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// The item number does not refer to a listed item.
    #[error("no item number {0}; run 'list' to see item numbers")]
    UnknownItem(usize),
}

/// Routes core validation errors through the umbrella type.
impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Billing(BillingError::from(err))
    }
}

/// Routes invoice errors through the umbrella type.
impl From<InvoiceError> for CliError {
    fn from(err: InvoiceError) -> Self {
        CliError::Billing(BillingError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_convert() {
        let err: CliError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "validation error: product name must not be empty");

        let err: CliError = InvoiceError::EmptyLedger.into();
        assert_eq!(
            err.to_string(),
            "invoice error: cannot generate an invoice for an empty ledger"
        );
    }

    #[test]
    fn test_usage_message() {
        let err = CliError::Usage("add <name> <price> <quantity>");
        assert_eq!(err.to_string(), "usage: add <name> <price> <quantity>");
    }
}
