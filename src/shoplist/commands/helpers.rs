use crate::commands::CmdResult;
use crate::error::{Result, ShoplistError};
use crate::index::{index_items, DisplayItem, ItemSelector};
use crate::store::{ItemStore, StorageBackend};
use std::collections::HashSet;

pub fn indexed_items<B: StorageBackend>(store: &ItemStore<B>) -> Result<Vec<DisplayItem>> {
    Ok(index_items(store.list()?))
}

/// Selectors resolved against the current persisted order.
#[derive(Debug, Default)]
pub struct Resolved {
    /// Matched items, deduplicated, in selector order.
    pub found: Vec<DisplayItem>,
    /// `id:` selectors that matched nothing.
    pub missing_ids: Vec<String>,
}

/// Maps selectors to items.
///
/// An out-of-range position is an error: the user is pointing at a row that
/// is not on screen. An unknown id is reported in `missing_ids` and left for
/// the command to decide.
pub fn resolve_selectors<B: StorageBackend>(
    store: &ItemStore<B>,
    selectors: &[ItemSelector],
) -> Result<Resolved> {
    let items = indexed_items(store)?;
    let mut resolved = Resolved::default();
    let mut seen = HashSet::new();

    for selector in selectors {
        let matched: &[DisplayItem] = match selector {
            ItemSelector::Position(n) => {
                let at = position_slot(*n, items.len())?;
                &items[at..=at]
            }
            // Bounds-checked before slicing, so a typo like `1-99999999` never
            // expands past the list.
            ItemSelector::Range(start, end) => {
                let first = position_slot(*start, items.len())?;
                let last = position_slot(*end, items.len())?;
                &items[first..=last]
            }
            ItemSelector::Id(id) => match items.iter().position(|d| &d.item.id == id) {
                Some(at) => &items[at..=at],
                None => {
                    resolved.missing_ids.push(id.clone());
                    continue;
                }
            },
        };

        for shown in matched {
            if seen.insert(shown.item.id.clone()) {
                resolved.found.push(shown.clone());
            }
        }
    }

    Ok(resolved)
}

/// Zero-based slot of a 1-based position, or the "not found" error.
fn position_slot(n: usize, len: usize) -> Result<usize> {
    if n == 0 || n > len {
        return Err(position_error(n, len));
    }
    Ok(n - 1)
}

fn position_error(n: usize, len: usize) -> ShoplistError {
    match len {
        0 => ShoplistError::Api(format!("Item {} not found: the list is empty", n)),
        len => ShoplistError::Api(format!(
            "Item {} not found: the list has {} item(s)",
            n, len
        )),
    }
}

/// Position of `id` in the current order, if present.
pub fn display_item_for<B: StorageBackend>(
    store: &ItemStore<B>,
    id: &str,
) -> Result<Option<DisplayItem>> {
    Ok(indexed_items(store)?
        .into_iter()
        .find(|d| d.item.id == id))
}

/// Recounts stats from the store. Every command returns through here.
pub fn finish<B: StorageBackend>(store: &ItemStore<B>, mut result: CmdResult) -> Result<CmdResult> {
    result.stats = Some(store.stats()?);
    Ok(result)
}
