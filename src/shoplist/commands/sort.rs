use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_items;
use crate::sort::{sort_items, SortOrder};
use crate::store::{ItemStore, StorageBackend};
use tracing::info;

use super::helpers::finish;

/// Sorts the collection and persists the new order.
///
/// Only the order changes, so lists with legacy problems (duplicate ids,
/// empty names) sort fine and are left for `doctor` to repair.
pub fn run<B: StorageBackend>(store: &ItemStore<B>, order: SortOrder) -> Result<CmdResult> {
    let mut items = store.list()?;
    sort_items(&mut items, order);
    if !items.is_empty() {
        store.reorder(&items)?;
    }
    info!(%order, count = items.len(), "sorted list");

    let mut result = CmdResult::default().with_listed_items(index_items(items));
    result.add_message(CmdMessage::success(format!("Sorted by {}", order)));
    finish(store, result)
}
