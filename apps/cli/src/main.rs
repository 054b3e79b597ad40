//! # Storebill Shell Entry Point
//!
//! An interactive shell standing in for the original single billing screen.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storebill Shell                                  │
//! │                                                                         │
//! │  stdin ──► parse ──► confirm (remove/clear only) ──► command fn        │
//! │                                                          │              │
//! │                                                          ▼              │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                   storebill-core                                 │  │
//! │  │  BillingLedger (one per session, owned by the REPL loop)         │  │
//! │  │  SystemClock (injected into invoice generation)                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                          │              │
//! │  stdout ◄── rendered output or "Error: ..." ◄────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Create the session ledger (empty, rates at zero)
//! 3. Run the read-eval-print loop until `quit` or EOF

mod commands;
mod error;

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use storebill_core::{BillingLedger, SystemClock};

fn main() {
    init_tracing();

    info!("Starting Storebill session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(stdin.lock(), stdout.lock()) {
        eprintln!("I/O error: {err}");
        std::process::exit(1);
    }
}

/// Runs the read-eval-print loop over the given streams.
///
/// The ledger lives exactly as long as this loop: one session, one ledger,
/// no persistence. Streams are parameters so tests can drive the loop with
/// in-memory buffers.
fn run(mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let clock = SystemClock;
    let mut ledger = BillingLedger::new();

    writeln!(out, "Store Billing - type 'help' for commands")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match commands::parse(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "Error: {err}")?;
                continue;
            }
        };

        let result = match command {
            Command::Add {
                name,
                price,
                quantity,
            } => commands::add_item(&mut ledger, &name, &price, &quantity),
            Command::Remove { index } => {
                // Confirmation is shell policy; the ledger itself removes
                // unconditionally once called
                if confirm(&mut input, &mut out, "Remove this product? [y/N] ")? {
                    commands::remove_item(&mut ledger, index)
                } else {
                    Ok("Cancelled".to_string())
                }
            }
            Command::Clear => {
                if confirm(&mut input, &mut out, "Remove all products? [y/N] ")? {
                    Ok(commands::clear(&mut ledger))
                } else {
                    Ok("Cancelled".to_string())
                }
            }
            Command::Tax { value } => commands::set_tax_rate(&mut ledger, &value),
            Command::Discount { value } => commands::set_discount_rate(&mut ledger, &value),
            Command::List => Ok(commands::render_list(&ledger)),
            Command::Invoice => commands::invoice(&ledger, &clock),
            Command::Help => Ok(commands::help().to_string()),
            Command::Quit => break,
        };

        match result {
            Ok(message) => writeln!(out, "{message}")?,
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }

    info!("Session ended");
    Ok(())
}

/// Prompts for a yes/no answer; anything other than `y`/`yes` declines.
fn confirm(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<bool> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storebill=trace` - Show trace for storebill crates only
/// - Default: INFO level, DEBUG for our own crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storebill=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut out = Vec::new();
        run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_session() {
        let output = run_session(
            "tax 10\n\
             discount 5\n\
             add Pen 2.50 3\n\
             add Notebook 5.00 2\n\
             list\n\
             invoice\n\
             quit\n",
        );

        assert!(output.contains("Added Pen ($2.50 x 3 = $7.50)"));
        assert!(output.contains("Products (2):"));
        assert!(output.contains("=== INVOICE ==="));
        assert!(output.contains("TOTAL: $18.38"));
    }

    #[test]
    fn test_invalid_input_keeps_session_alive() {
        let output = run_session(
            "add Pen abc 3\n\
             invoice\n\
             add Pen 2.50 3\n\
             list\n",
        );

        assert!(output.contains("Error: validation error: price must be a positive number"));
        assert!(output.contains("Error: invoice error: cannot generate an invoice"));
        // The session recovered and accepted the corrected input
        assert!(output.contains("Products (1):"));
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let output = run_session(
            "add Pen 2.50 3\n\
             remove 1\n\
             n\n\
             list\n\
             remove 1\n\
             y\n\
             list\n",
        );

        assert!(output.contains("Cancelled"));
        assert!(output.contains("Removed Pen"));
        assert!(output.ends_with("> No products added yet\n> "));
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let output = run_session(
            "add Pen 2.50 3\n\
             clear\n\
             y\n\
             list\n",
        );

        assert!(output.contains("All products removed"));
        assert!(output.contains("No products added yet"));
    }
}
