use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayItem, ItemSelector};
use crate::store::{ItemStore, StorageBackend};
use tracing::info;

use super::helpers::{finish, resolve_selectors};

/// Flips the purchased flag of each selected item.
pub fn run<B: StorageBackend>(
    store: &ItemStore<B>,
    selectors: &[ItemSelector],
) -> Result<CmdResult> {
    apply(store, selectors, |current| !current)
}

/// Sets the purchased flag explicitly (`check` / `uncheck`).
pub fn set<B: StorageBackend>(
    store: &ItemStore<B>,
    selectors: &[ItemSelector],
    purchased: bool,
) -> Result<CmdResult> {
    apply(store, selectors, |_| purchased)
}

fn apply<B: StorageBackend>(
    store: &ItemStore<B>,
    selectors: &[ItemSelector],
    next: impl Fn(bool) -> bool,
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for shown in resolved.found {
        let item = store.set_purchased(&shown.item.id, next(shown.item.purchased))?;
        info!(id = %item.id, purchased = item.purchased, "set purchased");
        let state = if item.purchased { "purchased" } else { "pending" };
        result.add_message(CmdMessage::success(format!(
            "{} marked as {}",
            item.name, state
        )));
        result.affected_items.push(DisplayItem {
            index: shown.index,
            item,
        });
    }

    for id in resolved.missing_ids {
        result.add_message(CmdMessage::warning(format!("No item with id {}", id)));
    }

    finish(store, result)
}
