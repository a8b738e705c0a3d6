//! Parsing of historical order item descriptions.
//!
//! Order history stores items as human-readable lines like `"2x Item G"`,
//! with multi-item lines joined by `" + "` (e.g. `"1x Item C + 1x Item D"`).
//! Repeat-order turns those descriptions back into cart items.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `"<qty>x <name>"`, case-insensitively, with optional spaces
/// around the `x`.
static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)\s*x\s*(.+)$").expect("Invalid regex"));

/// One item recovered from an order description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    /// Number of units, at least 1.
    pub quantity: u32,
    /// Item name as written in the description.
    pub name: String,
}

/// Parse one item-description line into its items.
///
/// Segments are split on `+`; each is matched against `<qty>x <name>`.
/// Parsing never fails: a segment that does not match (or whose quantity
/// parses to 0) is taken as one unit of the literal segment text.
#[must_use]
pub fn parse_order_line(line: &str) -> Vec<ParsedItem> {
    line.split('+')
        .map(str::trim)
        .map(|segment| match ITEM_RE.captures(segment) {
            Some(captures) => {
                let quantity = captures
                    .get(1)
                    .and_then(|m| m.as_str().parse::<u32>().ok())
                    .filter(|q| *q > 0)
                    .unwrap_or(1);
                let name = captures
                    .get(2)
                    .map_or("", |m| m.as_str())
                    .trim()
                    .to_owned();
                ParsedItem { quantity, name }
            }
            None => ParsedItem {
                quantity: 1,
                name: segment.to_owned(),
            },
        })
        .collect()
}
