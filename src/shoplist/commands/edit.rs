use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemSelector;
use crate::model::{coerce_quantity, ItemPatch};
use crate::store::{ItemStore, StorageBackend};
use tracing::info;

use super::helpers::{display_item_for, finish, resolve_selectors};

/// Renames an item and/or changes its quantity.
///
/// A name that trims to empty is rejected and the stored name is kept. An `id:`
/// selector that matches nothing creates the item under that id, which needs a
/// name.
pub fn run<B: StorageBackend>(
    store: &ItemStore<B>,
    selector: &ItemSelector,
    name: Option<&str>,
    quantity: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut patch = ItemPatch::new();
    if let Some(name) = name {
        patch = patch.name(name);
    }
    if let Some(raw) = quantity {
        patch = patch.quantity(coerce_quantity(raw));
    }
    if patch.is_empty() {
        result.add_message(CmdMessage::error(
            "Nothing to change: give a new name and/or --qty.",
        ));
        return finish(store, result);
    }

    let resolved = resolve_selectors(store, std::slice::from_ref(selector))?;
    let (id, previous) = match (resolved.found.first(), resolved.missing_ids.first()) {
        (Some(display), _) => (display.item.id.clone(), Some(display.item.name.clone())),
        (None, Some(id)) => (id.clone(), None),
        (None, None) => return finish(store, result),
    };

    match (&previous, patch.trimmed_name()) {
        (Some(old), Some("")) => {
            result.add_message(CmdMessage::error(format!(
                "Item name cannot be empty; keeping \"{}\".",
                old
            )));
            return finish(store, result);
        }
        (None, None | Some("")) => {
            result.add_message(CmdMessage::error(format!(
                "No item with id {}; give a name to create it.",
                id
            )));
            return finish(store, result);
        }
        _ => {}
    }

    let updated = store.update(&id, &patch)?;
    info!(id = %updated.id, "edited item");

    match previous {
        Some(old) if old != updated.name => result.add_message(CmdMessage::success(format!(
            "Renamed \"{}\" to \"{}\"",
            old, updated.name
        ))),
        Some(_) => result.add_message(CmdMessage::success(format!("{} updated", updated.name))),
        None => result.add_message(CmdMessage::success(format!("{} added", updated.name))),
    }
    if let Some(display) = display_item_for(store, &updated.id)? {
        result.affected_items.push(display);
    }
    finish(store, result)
}
