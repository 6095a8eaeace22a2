#![allow(missing_docs)]
//! Item list parser
//!
//! Turns raw multi-line user text into ordered `(name, quantity)` records and
//! the canonical tab-delimited payload the Janice API consumes.

use crate::error::{JaniceError, Result};
use crate::types::{AppraisedItem, ItemLine};

/// Parse raw user text into item lines.
///
/// Blank lines are dropped. Within a line, tokens are scanned left to right:
/// every integer token closes the accumulated name tokens into one item with
/// that quantity, so `"Tritanium 100 PLEX 5"` yields two items. Names with no
/// trailing number get quantity 1. An integer with no preceding name tokens
/// has no item to attach to and is discarded.
#[must_use]
pub fn parse_items(raw: &str) -> Vec<ItemLine> {
    let mut items = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut name_tokens: Vec<&str> = Vec::new();
        for token in line.split_whitespace() {
            if let Ok(quantity) = token.parse::<u64>() {
                if !name_tokens.is_empty() {
                    items.push(ItemLine {
                        name: name_tokens.join(" "),
                        // quantities are positive by invariant
                        quantity: quantity.max(1),
                    });
                    name_tokens.clear();
                }
            } else {
                name_tokens.push(token);
            }
        }

        if !name_tokens.is_empty() {
            items.push(ItemLine {
                name: name_tokens.join(" "),
                quantity: 1,
            });
        }
    }

    items
}

/// Join item lines into the canonical `name\tquantity` payload, input order
/// preserved.
#[must_use]
pub fn lines_to_payload(items: &[ItemLine]) -> String {
    items
        .iter()
        .map(|item| format!("{}\t{}", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rebuild a canonical payload from appraised items, used when a recalled
/// code is expanded back into an item list.
#[must_use]
pub fn items_to_payload(items: &[AppraisedItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}\t{}", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse raw user text straight into a canonical payload.
///
/// # Errors
///
/// Returns an `EmptyInput` error when no items survive parsing.
pub fn parse(raw: &str) -> Result<String> {
    let items = parse_items(raw);
    if items.is_empty() {
        return Err(JaniceError::empty_input("Please provide items to appraise."));
    }
    Ok(lines_to_payload(&items))
}
