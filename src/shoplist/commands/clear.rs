use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ItemStore, StorageBackend};
use tracing::info;

use super::helpers::finish;

pub fn run<B: StorageBackend>(store: &ItemStore<B>) -> Result<CmdResult> {
    let count = store.list()?.len();
    store.clear()?;
    info!(count, "cleared list");

    let mut result = CmdResult::default();
    if count == 0 {
        result.add_message(CmdMessage::info("The list is already empty."));
    } else {
        result.add_message(CmdMessage::success(format!("Cleared {} item(s)", count)));
    }
    finish(store, result)
}
