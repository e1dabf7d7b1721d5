use crate::codec::{encode, export_filename};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShoplistError};
use crate::store::{ItemStore, StorageBackend};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use super::helpers::finish;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Write `lista-compras-DD-MM-YYYY.txt` into this directory.
    Directory(PathBuf),
    /// Hand the text back in `CmdResult::exported_text`.
    Stdout,
}

/// Exports the collection as `name;quantity;purchased` lines.
///
/// `today` names the file. An empty list exports nothing.
pub fn run<B: StorageBackend>(
    store: &ItemStore<B>,
    target: ExportTarget,
    today: NaiveDate,
) -> Result<CmdResult> {
    let items = store.list()?;
    let mut result = CmdResult::default();

    if items.is_empty() {
        result.add_message(CmdMessage::info("No items to export."));
        return finish(store, result);
    }

    let text = encode(&items);
    match target {
        ExportTarget::Stdout => {
            result.exported_text = Some(text);
        }
        ExportTarget::Directory(dir) => {
            if !dir.exists() {
                fs::create_dir_all(&dir).map_err(ShoplistError::Io)?;
            }
            let path = dir.join(export_filename(today));
            fs::write(&path, text).map_err(ShoplistError::Io)?;
            info!(path = %path.display(), count = items.len(), "exported list");
            result.add_message(CmdMessage::success(format!(
                "Exported {} item(s) to {}",
                items.len(),
                path.display()
            )));
            result.export_path = Some(path);
        }
    }

    finish(store, result)
}
