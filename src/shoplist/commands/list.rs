use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{ItemStore, StorageBackend};

use super::helpers::{finish, indexed_items};

/// All items in persisted order.
pub fn run<B: StorageBackend>(store: &ItemStore<B>) -> Result<CmdResult> {
    let items = indexed_items(store)?;
    let result = CmdResult::default()
        .with_listed_items(items)
        .with_theme(store.theme()?);
    finish(store, result)
}

/// Counters only.
pub fn stats<B: StorageBackend>(store: &ItemStore<B>) -> Result<CmdResult> {
    finish(store, CmdResult::default())
}
