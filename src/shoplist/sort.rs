//! List orderings.
//!
//! A sort is applied once and the result becomes the persisted order; there is
//! no live sorted view. All four orderings break ties by name so that sorting
//! is deterministic and idempotent.

use crate::model::Item;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// A to Z, ignoring accents and case.
    NameAsc,
    /// Z to A, ignoring accents and case.
    NameDesc,
    /// Purchased items first, then by name.
    PurchasedFirst,
    /// Pending items first, then by name.
    PendingFirst,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[
            SortOrder::NameAsc,
            SortOrder::NameDesc,
            SortOrder::PurchasedFirst,
            SortOrder::PendingFirst,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::NameAsc => "name (A-Z)",
            SortOrder::NameDesc => "name (Z-A)",
            SortOrder::PurchasedFirst => "purchased first",
            SortOrder::PendingFirst => "pending first",
        }
    }

    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortOrder::NameAsc => compare_names_localized(&a.name, &b.name),
            SortOrder::NameDesc => compare_names_localized(&a.name, &b.name).reverse(),
            // The status groupings sub-order by a plain comparison, not the
            // accent-folding one used for A-Z.
            SortOrder::PurchasedFirst => b
                .purchased
                .cmp(&a.purchased)
                .then_with(|| a.name.cmp(&b.name)),
            SortOrder::PendingFirst => a
                .purchased
                .cmp(&b.purchased)
                .then_with(|| a.name.cmp(&b.name)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "az" | "a-z" | "name" | "asc" => Ok(SortOrder::NameAsc),
            "za" | "z-a" | "name-desc" | "desc" => Ok(SortOrder::NameDesc),
            "purchased" | "purchased-first" | "done" => Ok(SortOrder::PurchasedFirst),
            "pending" | "pending-first" | "todo" => Ok(SortOrder::PendingFirst),
            other => Err(format!(
                "Unknown sort order: {} (expected az, za, purchased or pending)",
                other
            )),
        }
    }
}

/// Sorts in place. The sort is stable.
pub fn sort_items(items: &mut [Item], order: SortOrder) {
    items.sort_by(|a, b| order.compare(a, b));
}

/// Folds a name for Portuguese (pt-BR) base-sensitivity comparison: accents
/// and case are dropped, so "Açúcar", "acucar" and "ACUCAR" share a key.
/// Ligatures and letters without a decomposition are spelled out ("ß" as
/// "ss", "æ" as "ae").
pub fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match c {
            'ß' => key.push_str("ss"),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            'þ' => key.push_str("th"),
            'ø' => key.push('o'),
            'ð' => key.push('d'),
            'ł' => key.push('l'),
            c => key.push(c),
        }
    }
    key
}

/// Primary weight of a folded character: whitespace, then punctuation and
/// symbols, then digits, then letters. Within a class, code point order.
///
/// This is the coarse shape of the Unicode collation order, not the full
/// table: punctuation and symbols are not ranked against each other the way
/// CLDR ranks them.
fn primary_weight(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    };
    (class, c)
}

/// Accent- and case-insensitive comparison, falling back to plain order when
/// the folded keys are equal.
pub fn compare_names_localized(a: &str, b: &str) -> Ordering {
    let key_a = collation_key(a);
    let key_b = collation_key(b);
    key_a
        .chars()
        .map(primary_weight)
        .cmp(key_b.chars().map(primary_weight))
        .then_with(|| a.cmp(b))
}
