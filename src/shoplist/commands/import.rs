use crate::codec::decode;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_items;
use crate::store::{ItemStore, StorageBackend};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use super::helpers::finish;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    File(PathBuf),
    /// Already-read text, e.g. from stdin.
    Text(String),
}

/// Replaces the whole collection with the contents of an export file.
///
/// The file is read and parsed in full before the store is touched. A file
/// that cannot be read short-circuits with a warning and changes nothing.
pub fn run<B: StorageBackend>(store: &ItemStore<B>, source: ImportSource) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let text = match source {
        ImportSource::Text(text) => text,
        ImportSource::File(path) => match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "import file unreadable");
                result.add_message(CmdMessage::warning(format!(
                    "Could not read {}: {}",
                    path.display(),
                    e
                )));
                return finish(store, result);
            }
        },
    };

    let decoded = decode(&text);
    store.replace_all(&decoded.items)?;
    info!(
        imported = decoded.items.len(),
        skipped = decoded.skipped_lines.len(),
        "imported list"
    );

    result.add_message(CmdMessage::success(format!(
        "Imported {} item(s)",
        decoded.items.len()
    )));
    if !decoded.skipped_lines.is_empty() {
        let lines: Vec<String> = decoded
            .skipped_lines
            .iter()
            .map(|n| n.to_string())
            .collect();
        result.add_message(CmdMessage::warning(format!(
            "Skipped line(s) {}: empty name",
            lines.join(", ")
        )));
    }
    result.listed_items = index_items(decoded.items);
    finish(store, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fixtures::StoreFixture;
    use tempfile::tempdir;

    #[test]
    fn replaces_existing_items() {
        let fixture = StoreFixture::new().with_items(3);
        let old_ids: Vec<_> = fixture
            .store
            .list()
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();

        let result = run(
            &fixture.store,
            ImportSource::Text("Bread;2;true\nEggs;;false\n\nRice;3;TRUE".into()),
        )
        .unwrap();

        let items = fixture.store.list().unwrap();
        let triples: Vec<_> = items
            .iter()
            .map(|i| (i.name.as_str(), i.quantity, i.purchased))
            .collect();
        assert_eq!(
            triples,
            vec![("Bread", 2, true), ("Eggs", 1, false), ("Rice", 3, false)]
        );
        assert!(items.iter().all(|i| !old_ids.contains(&i.id)));
        assert_eq!(result.listed_items.len(), 3);
        let stats = result.stats.unwrap();
        assert_eq!((stats.pending, stats.purchased, stats.total), (2, 1, 3));
    }

    #[test]
    fn reads_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lista.txt");
        fs::write(&path, "Café;1;false\n").unwrap();

        let fixture = StoreFixture::new();
        run(&fixture.store, ImportSource::File(path)).unwrap();
        assert_eq!(fixture.names(), vec!["Café"]);
    }

    #[test]
    fn missing_file_has_no_side_effects() {
        let temp = tempdir().unwrap();
        let fixture = StoreFixture::new().with_items(2);
        let before = fixture.store.list().unwrap();

        let result = run(
            &fixture.store,
            ImportSource::File(temp.path().join("missing.txt")),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(fixture.store.list().unwrap(), before);
    }

    #[test]
    fn reports_skipped_lines() {
        let fixture = StoreFixture::new();
        let result = run(
            &fixture.store,
            ImportSource::Text("Milk;1;false\n  ;4;true\nEggs;2;false".into()),
        )
        .unwrap();

        assert_eq!(fixture.names(), vec!["Milk", "Eggs"]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("line(s) 2")));
    }

    #[test]
    fn empty_import_empties_the_list() {
        let fixture = StoreFixture::new().with_items(2);
        run(&fixture.store, ImportSource::Text("\n\n".into())).unwrap();
        assert!(fixture.store.list().unwrap().is_empty());
    }
}
