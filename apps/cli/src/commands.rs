//! # Shell Commands
//!
//! Parsing and dispatch for the interactive billing shell.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│  Items   │────►│ Invoice  │                        │
//! │  │  Ledger  │     │  Listed  │     │ Printed  │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add / remove                                          │
//! │                   tax / discount                                        │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear ──────────────────────► (back to empty)        │
//! │                                                                         │
//! │  NOTE: remove and clear are gated by a y/n prompt in main.rs.           │
//! │        By the time a command function runs, the user has confirmed.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use storebill_core::money::{format_rate, format_usd};
use storebill_core::{BillingLedger, TimeSource};

use crate::error::CliError;

// =============================================================================
// Command Parsing
// =============================================================================

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add <name> <price> <quantity>` - name may contain spaces.
    Add {
        name: String,
        price: String,
        quantity: String,
    },
    /// `remove <n>` - remove item by its 1-based list number.
    Remove { index: usize },
    /// `clear` - remove all items.
    Clear,
    /// `tax <percent>` - set the tax rate.
    Tax { value: String },
    /// `discount <percent>` - set the discount rate.
    Discount { value: String },
    /// `list` - show items and totals.
    List,
    /// `invoice` - print the invoice document.
    Invoice,
    /// `help` - show command reference.
    Help,
    /// `quit` / `exit` - end the session.
    Quit,
}

/// Parses one input line into a command.
///
/// ## Errors
/// `CliError::Usage` when the line does not match any command shape.
pub fn parse(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["add", rest @ ..] => {
            // Last two tokens are price and quantity; everything before
            // them is the (possibly multi-word) product name
            if rest.len() < 3 {
                return Err(CliError::Usage("add <name> <price> <quantity>"));
            }
            let quantity = rest[rest.len() - 1].to_string();
            let price = rest[rest.len() - 2].to_string();
            let name = rest[..rest.len() - 2].join(" ");
            Ok(Command::Add {
                name,
                price,
                quantity,
            })
        }
        ["remove", index] => {
            let index: usize = index.parse().map_err(|_| CliError::InvalidNumber {
                field: "item number",
                value: index.to_string(),
            })?;
            Ok(Command::Remove { index })
        }
        ["clear"] => Ok(Command::Clear),
        ["tax", value] => Ok(Command::Tax {
            value: value.to_string(),
        }),
        ["discount", value] => Ok(Command::Discount {
            value: value.to_string(),
        }),
        ["list"] => Ok(Command::List),
        ["invoice"] => Ok(Command::Invoice),
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        _ => Err(CliError::Usage(
            "add | remove | clear | tax | discount | list | invoice | help | quit",
        )),
    }
}

// =============================================================================
// Command Functions
// =============================================================================

/// Adds a product to the ledger from raw text input.
///
/// ## Returns
/// A one-line confirmation with the parsed fields.
pub fn add_item(
    ledger: &mut BillingLedger,
    name: &str,
    price: &str,
    quantity: &str,
) -> Result<String, CliError> {
    debug!(name, price, quantity, "add command");

    let item = ledger.add_item(name, price, quantity)?;
    Ok(format!(
        "Added {} ({} x {} = {})",
        item.name,
        format_usd(item.unit_price),
        item.quantity,
        format_usd(item.line_total())
    ))
}

/// Removes the item at the given 1-based list position.
///
/// The shell addresses items by list number; this resolves the number to
/// the item's id and removes by id, like any other front-end would.
pub fn remove_item(ledger: &mut BillingLedger, index: usize) -> Result<String, CliError> {
    debug!(index, "remove command");

    let item = index
        .checked_sub(1)
        .and_then(|i| ledger.items().get(i))
        .ok_or(CliError::UnknownItem(index))?;

    let name = item.name.clone();
    let id = item.id;

    // The id came from the list above, so the removal always succeeds
    ledger.remove_item(id);
    Ok(format!("Removed {}", name))
}

/// Clears the whole ledger.
pub fn clear(ledger: &mut BillingLedger) -> String {
    debug!("clear command");

    ledger.clear();
    "All products removed".to_string()
}

/// Sets the tax rate from raw text.
pub fn set_tax_rate(ledger: &mut BillingLedger, value: &str) -> Result<String, CliError> {
    debug!(value, "tax command");

    let rate = parse_rate("tax rate", value)?;
    ledger.set_tax_rate(rate);
    Ok(format!("Tax rate set to {}%", format_rate(rate)))
}

/// Sets the discount rate from raw text.
pub fn set_discount_rate(ledger: &mut BillingLedger, value: &str) -> Result<String, CliError> {
    debug!(value, "discount command");

    let rate = parse_rate("discount rate", value)?;
    ledger.set_discount_rate(rate);
    Ok(format!("Discount rate set to {}%", format_rate(rate)))
}

/// Renders the item list and current totals (the "screen" of the original
/// app).
pub fn render_list(ledger: &BillingLedger) -> String {
    debug!("list command");

    if ledger.is_empty() {
        return "No products added yet".to_string();
    }

    let summary = ledger.summary();
    let mut out = format!("Products ({}):\n", ledger.item_count());
    for (index, item) in ledger.items().iter().enumerate() {
        out.push_str(&format!(
            "{}. {}\n   {} x {} = {}\n",
            index + 1,
            item.name,
            format_usd(item.unit_price),
            item.quantity,
            format_usd(item.line_total())
        ));
    }
    out.push_str(&format!(
        "Subtotal: {}\nTax ({}%): {}\nDiscount ({}%): -{}\nTotal: {}",
        format_usd(summary.subtotal),
        format_rate(ledger.tax_rate_percent()),
        format_usd(summary.tax_amount),
        format_rate(ledger.discount_rate_percent()),
        format_usd(summary.discount_amount),
        format_usd(summary.total)
    ));
    out
}

/// Generates the invoice document.
pub fn invoice(ledger: &BillingLedger, clock: &dyn TimeSource) -> Result<String, CliError> {
    debug!("invoice command");

    Ok(ledger.generate_invoice(clock)?)
}

/// Command reference shown by `help` and at startup.
pub fn help() -> &'static str {
    "Commands:\n\
     \x20 add <name> <price> <quantity>   add a product\n\
     \x20 remove <n>                      remove product number <n>\n\
     \x20 clear                           remove all products\n\
     \x20 tax <percent>                   set the tax rate\n\
     \x20 discount <percent>              set the discount rate\n\
     \x20 list                            show products and totals\n\
     \x20 invoice                         generate the invoice\n\
     \x20 help                            show this reference\n\
     \x20 quit                            end the session"
}

fn parse_rate(field: &'static str, value: &str) -> Result<f64, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use storebill_core::ValidationError;

    #[test]
    fn test_parse_add_multi_word_name() {
        let cmd = parse("add Blue Pen 2.50 3").unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "Blue Pen".to_string(),
                price: "2.50".to_string(),
                quantity: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_short_add() {
        assert!(matches!(parse("add Pen 2.50"), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("clear").unwrap(), Command::Clear);
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("invoice").unwrap(), Command::Invoice);
        assert_eq!(parse("remove 2").unwrap(), Command::Remove { index: 2 });
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(parse("frobnicate"), Err(CliError::Usage(_))));
        assert!(matches!(parse(""), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_add_item_reports_line_total() {
        let mut ledger = BillingLedger::new();
        let msg = add_item(&mut ledger, "Pen", "2.50", "3").unwrap();
        assert_eq!(msg, "Added Pen ($2.50 x 3 = $7.50)");
    }

    #[test]
    fn test_add_item_surfaces_core_error() {
        let mut ledger = BillingLedger::new();
        let err = add_item(&mut ledger, "", "2.50", "3").unwrap_err();
        assert_eq!(err, CliError::from(ValidationError::EmptyName));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remove_item_by_list_number() {
        let mut ledger = BillingLedger::new();
        add_item(&mut ledger, "Pen", "2.50", "3").unwrap();
        add_item(&mut ledger, "Notebook", "5.00", "2").unwrap();

        let msg = remove_item(&mut ledger, 1).unwrap();
        assert_eq!(msg, "Removed Pen");
        assert_eq!(ledger.item_count(), 1);
        assert_eq!(ledger.items()[0].name, "Notebook");
    }

    #[test]
    fn test_remove_item_out_of_range() {
        let mut ledger = BillingLedger::new();
        add_item(&mut ledger, "Pen", "2.50", "3").unwrap();

        assert_eq!(remove_item(&mut ledger, 0).unwrap_err(), CliError::UnknownItem(0));
        assert_eq!(remove_item(&mut ledger, 5).unwrap_err(), CliError::UnknownItem(5));
        assert_eq!(ledger.item_count(), 1);
    }

    #[test]
    fn test_set_rates() {
        let mut ledger = BillingLedger::new();
        assert_eq!(set_tax_rate(&mut ledger, "10").unwrap(), "Tax rate set to 10%");
        assert_eq!(
            set_discount_rate(&mut ledger, "8.25").unwrap(),
            "Discount rate set to 8.25%"
        );
        assert_eq!(ledger.tax_rate_percent(), 10.0);
        assert_eq!(ledger.discount_rate_percent(), 8.25);

        assert!(matches!(
            set_tax_rate(&mut ledger, "ten"),
            Err(CliError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_render_list() {
        let mut ledger = BillingLedger::new();
        assert_eq!(render_list(&ledger), "No products added yet");

        set_tax_rate(&mut ledger, "10").unwrap();
        set_discount_rate(&mut ledger, "5").unwrap();
        add_item(&mut ledger, "Pen", "2.50", "3").unwrap();
        add_item(&mut ledger, "Notebook", "5.00", "2").unwrap();

        let listing = render_list(&ledger);
        assert!(listing.starts_with("Products (2):\n"));
        assert!(listing.contains("1. Pen\n   $2.50 x 3 = $7.50\n"));
        assert!(listing.contains("2. Notebook\n   $5.00 x 2 = $10.00\n"));
        assert!(listing.ends_with(
            "Subtotal: $17.50\nTax (10%): $1.75\nDiscount (5%): -$0.88\nTotal: $18.38"
        ));
    }
}
