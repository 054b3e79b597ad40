//! # Error Types
//!
//! Domain-specific error types for storebill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storebill-core errors (this file)                                     │
//! │  ├── ValidationError  - Input validation failures (add_item)           │
//! │  ├── InvoiceError     - Invoice generation preconditions               │
//! │  └── BillingError     - Umbrella over both, for callers that           │
//! │                         funnel everything through one Result           │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - What the shell prints (wraps BillingError)     │
//! │                                                                         │
//! │  Flow: ValidationError/InvoiceError → BillingError → CliError → user   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Every variant maps to a user-correctable message
//! 4. The core never logs and never retries; callers decide presentation

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for `add_item`.
///
/// These occur when the raw text supplied by the user interface does not
/// produce a valid line item. All of them are user-correctable, and all of
/// them leave the ledger exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The product name is empty after trimming whitespace.
    #[error("product name must not be empty")]
    EmptyName,

    /// The price text does not parse to a finite decimal, or is not
    /// strictly positive.
    #[error("price must be a positive number, got '{input}'")]
    InvalidPrice { input: String },

    /// The quantity text does not parse to an integer, or is not
    /// strictly positive.
    #[error("quantity must be a positive whole number, got '{input}'")]
    InvalidQuantity { input: String },
}

// =============================================================================
// Invoice Error
// =============================================================================

/// Invoice generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceError {
    /// There is nothing to invoice.
    #[error("cannot generate an invoice for an empty ledger")]
    EmptyLedger,
}

// =============================================================================
// Billing Error (umbrella)
// =============================================================================

/// Umbrella error for callers that route every ledger operation through a
/// single `Result` type (the CLI does this).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// Input validation failed (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Invoice generation failed (wraps InvoiceError).
    #[error("invoice error: {0}")]
    Invoice(#[from] InvoiceError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
