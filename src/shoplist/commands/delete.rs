use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemSelector;
use crate::store::{ItemStore, StorageBackend};
use tracing::info;

use super::helpers::{finish, resolve_selectors};

/// Removes the selected items.
///
/// Selectors are resolved before anything is removed, so `delete 1 2` removes
/// the first two rows as listed, not the first row twice. Unknown ids are a
/// no-op.
pub fn run<B: StorageBackend>(
    store: &ItemStore<B>,
    selectors: &[ItemSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for shown in resolved.found {
        if store.remove(&shown.item.id)? {
            info!(id = %shown.item.id, "deleted item");
            result.add_message(CmdMessage::success(format!(
                "Deleted ({}): {}",
                shown.index, shown.item.name
            )));
            result.affected_items.push(shown);
        }
    }

    for id in resolved.missing_ids {
        result.add_message(CmdMessage::info(format!(
            "No item with id {}; nothing to delete",
            id
        )));
    }

    finish(store, result)
}
