//! # Text Export/Import Format
//!
//! One item per line, three `;`-separated fields, no header:
//!
//! ```text
//! Arroz;2;false
//! Feijão;1;true
//! ```
//!
//! There is no escaping. A name containing `;` or a newline does not survive a
//! round trip; the name is cut at the first `;` on import.
//!
//! Decoding is forgiving: missing or non-numeric quantities become 1, and the
//! purchased flag is set only by the exact (case-sensitive) text `true`. Lines
//! whose name is empty after trimming are skipped, since an item may never
//! have an empty name.

use crate::model::{coerce_quantity, Item};
use chrono::NaiveDate;

pub const FIELD_DELIMITER: char = ';';
pub const EXPORT_FILE_PREFIX: &str = "lista-compras";

/// Output of [`decode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Parsed items, each with a fresh id, in file order.
    pub items: Vec<Item>,
    /// 1-based line numbers that were dropped because the name was empty.
    pub skipped_lines: Vec<usize>,
}

pub fn encode_line(item: &Item) -> String {
    format!(
        "{}{d}{}{d}{}",
        item.name,
        item.quantity,
        item.purchased,
        d = FIELD_DELIMITER
    )
}

/// Serializes the collection, one line per item, joined by `\n` with no
/// trailing newline.
pub fn encode(items: &[Item]) -> String {
    items.iter().map(encode_line).collect::<Vec<_>>().join("\n")
}

/// Parses one non-blank line. Returns `None` when the name trims to empty.
pub fn decode_line(line: &str) -> Option<Item> {
    let mut fields = line.splitn(3, FIELD_DELIMITER);
    let name = fields.next().unwrap_or_default().trim();
    if name.is_empty() {
        return None;
    }
    let quantity = fields.next().map(coerce_quantity).unwrap_or(1);
    let purchased = fields.next().is_some_and(|raw| raw.trim() == "true");
    Some(Item::new(name, quantity).purchased(purchased))
}

pub fn decode(text: &str) -> Decoded {
    let mut decoded = Decoded::default();
    for (idx, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Some(item) => decoded.items.push(item),
            None => decoded.skipped_lines.push(idx + 1),
        }
    }
    decoded
}

/// `lista-compras-DD-MM-YYYY.txt`
pub fn export_filename(date: NaiveDate) -> String {
    format!("{}-{}.txt", EXPORT_FILE_PREFIX, date.format("%d-%m-%Y"))
}
