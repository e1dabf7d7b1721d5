use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::new_item_id;
use crate::store::{ItemStore, StorageBackend, CORRUPT_LIST_KEY};
use std::collections::HashSet;
use tracing::info;

use super::helpers::finish;

/// Checks the stored list and repairs what it can.
///
/// - An unreadable list is moved aside to `list.corrupt`, leaving an empty list.
/// - Items sharing an id get fresh ids (the first keeps its id).
/// - Items with an empty name are dropped.
/// - Quantities are rewritten in their normalized form.
pub fn run<B: StorageBackend>(store: &ItemStore<B>) -> Result<CmdResult> {
    let health = store.inspect()?;
    let mut result = CmdResult::default();

    if health.is_healthy() {
        result.add_message(CmdMessage::success("No problems found."));
        return finish(store, result.with_health(health));
    }

    result.add_message(CmdMessage::warning("Problems found and fixed:"));

    if health.corrupt_blob {
        store.quarantine_corrupt()?;
        result.add_message(CmdMessage::info(format!(
            "  - The stored list was unreadable; moved it to `{}` and started empty.",
            CORRUPT_LIST_KEY
        )));
        return finish(store, result.with_health(health));
    }

    let mut seen = HashSet::new();
    let mut repaired = Vec::new();
    for mut item in store.list()? {
        if item.name.trim().is_empty() {
            continue;
        }
        if !seen.insert(item.id.clone()) {
            item.id = new_item_id();
            seen.insert(item.id.clone());
        }
        repaired.push(item);
    }
    store.replace_all(&repaired)?;
    info!(
        duplicates = health.duplicate_ids.len(),
        empty_names = health.empty_names,
        quantities = health.coerced_quantities,
        "repaired list"
    );

    if !health.duplicate_ids.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - Gave fresh ids to items sharing: {}",
            health.duplicate_ids.join(", ")
        )));
    }
    if health.empty_names > 0 {
        result.add_message(CmdMessage::info(format!(
            "  - Removed {} item(s) with an empty name.",
            health.empty_names
        )));
    }
    if health.coerced_quantities > 0 {
        result.add_message(CmdMessage::info(format!(
            "  - Normalized {} invalid quantity value(s) to whole numbers.",
            health.coerced_quantities
        )));
    }

    finish(store, result.with_health(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use crate::store::LIST_KEY;

    #[test]
    fn healthy_store_reports_nothing() {
        let fixture = StoreFixture::new().with_items(3);
        let writes = fixture.store.backend().write_count();
        let result = run(&fixture.store).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("No problems"));
        assert_eq!(fixture.store.backend().write_count(), writes);
    }

    #[test]
    fn quarantines_corrupt_blob() {
        let fixture = StoreFixture::with_raw_list("[{\"id\":");
        let result = run(&fixture.store).unwrap();

        assert!(result.health.unwrap().corrupt_blob);
        let backend = fixture.store.backend();
        assert_eq!(backend.get(LIST_KEY).unwrap(), None);
        assert_eq!(
            backend.get(CORRUPT_LIST_KEY).unwrap().as_deref(),
            Some("[{\"id\":")
        );
    }

    #[test]
    fn repairs_duplicates_names_and_quantities() {
        let fixture = StoreFixture::with_raw_list(
            r#"[{"id":"1","name":"Arroz","quantity":"2","comprado":true},
                {"id":"1","name":"Feijão","quantity":1},
                {"id":"2","name":"  ","quantity":3},
                {"id":"3","name":"Café","quantity":-1}]"#,
        );

        let result = run(&fixture.store).unwrap();
        assert!(result.messages.len() >= 4);

        let items = fixture.store.list().unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Arroz", "Feijão", "Café"]);
        assert_eq!(items[0].id, "1");
        assert_ne!(items[1].id, "1");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[2].quantity, 1);
        assert!(items[0].purchased);

        // Second pass finds nothing left to fix.
        assert!(fixture.store.inspect().unwrap().is_healthy());
    }
}
