//! # Item Selectors: Position vs Id
//!
//! Items carry opaque ids (UUIDs for new items, timestamps for lists written by
//! older versions). Nobody wants to type those, so the CLI addresses items by
//! their 1-based position in the persisted order, the same numbers `list`
//! prints.
//!
//! Positions drift: after `sort` or `delete`, position 2 may be a different
//! item. Scripts that need stability can use `id:<token>` instead.
//!
//! ## Accepted Forms
//!
//! - `3`: the third item
//! - `2-4`: items 2, 3 and 4 (start must not exceed end)
//! - `id:1700000000000`: the item with that id
//!
//! ## Implementation
//!
//! - [`index_items`]: pairs each item with its display position
//! - [`ItemSelector`]: one parsed user selector
//! - [`parse_selectors`]: parses a list of user inputs, including ranges
//!
//! Ranges stay unexpanded until they are checked against the list length in
//! [`crate::commands::helpers`], where all selectors are resolved to ids.

use crate::model::Item;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const ID_PREFIX: &str = "id:";

/// An item paired with its 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub index: usize,
    pub item: Item,
}

/// Assigns display positions in persisted order.
///
/// Always use this instead of enumerating manually, so list output and
/// selector resolution agree on numbering.
pub fn index_items(items: Vec<Item>) -> Vec<DisplayItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| DisplayItem { index: i + 1, item })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemSelector {
    Position(usize),
    /// Inclusive `start-end`, with `start <= end`.
    Range(usize, usize),
    Id(String),
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSelector::Position(n) => write!(f, "{}", n),
            ItemSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            ItemSelector::Id(id) => write!(f, "{}{}", ID_PREFIX, id),
        }
    }
}

impl FromStr for ItemSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(id) = s.strip_prefix(ID_PREFIX) {
            if id.is_empty() {
                return Err("Empty id selector".to_string());
            }
            return Ok(ItemSelector::Id(id.to_string()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err("Positions start at 1".to_string()),
            Ok(n) => Ok(ItemSelector::Position(n)),
            Err(_) => Err(format!("Invalid item selector: {}", s)),
        }
    }
}

/// Parses one input that may be a single selector or a `start-end` range.
pub fn parse_selector_or_range(s: &str) -> Result<ItemSelector, String> {
    let s = s.trim();
    if s.starts_with(ID_PREFIX) {
        return s.parse();
    }

    let Some((start, end)) = s.split_once('-') else {
        return s.parse();
    };

    let parse_end = |raw: &str| -> Result<usize, String> {
        match raw.parse::<ItemSelector>()? {
            ItemSelector::Position(n) => Ok(n),
            _ => Err(format!("Invalid range: {}", s)),
        }
    };
    let start = parse_end(start)?;
    let end = parse_end(end)?;
    if start > end {
        return Err(format!("Invalid range: {} comes after {}", start, end));
    }
    if start == end {
        return Ok(ItemSelector::Position(start));
    }
    Ok(ItemSelector::Range(start, end))
}

/// Parses every input, preserving order.
pub fn parse_selectors<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<ItemSelector>, String> {
    inputs
        .iter()
        .map(|input| parse_selector_or_range(input.as_ref()))
        .collect()
}
