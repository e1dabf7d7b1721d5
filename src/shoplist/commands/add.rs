use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayItem;
use crate::model::{coerce_quantity, Item, DEFAULT_QUANTITY};
use crate::store::{ItemStore, StorageBackend};
use tracing::info;

use super::helpers::finish;

/// Appends a new pending item.
///
/// The name is trimmed; an empty name is rejected with an error message and the
/// store is left untouched. The raw quantity is coerced, so anything that is
/// not a positive integer becomes 1.
pub fn run<B: StorageBackend>(
    store: &ItemStore<B>,
    name: &str,
    quantity: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let name = name.trim();
    if name.is_empty() {
        result.add_message(CmdMessage::error("Please enter a name to add an item."));
        return finish(store, result);
    }

    let quantity = quantity.map(coerce_quantity).unwrap_or(DEFAULT_QUANTITY);
    let item = Item::new(name, quantity);
    store.add(item.clone())?;
    info!(id = %item.id, quantity, "added item");

    let index = store.list()?.len();
    result.add_message(CmdMessage::success(format!("{} added", item.name)));
    result.affected_items.push(DisplayItem { index, item });
    finish(store, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn adds_trimmed_item_with_coerced_quantity() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, "  Milk  ", Some("abc")).unwrap();

        let items = fixture.store.list().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].quantity, 1);
        assert!(!items[0].purchased);

        assert_eq!(result.affected_items[0].index, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Milk added");
    }

    #[test]
    fn appends_at_the_end() {
        let fixture = StoreFixture::new().with_items(2);
        let result = run(&fixture.store, "Eggs", Some("12")).unwrap();
        assert_eq!(fixture.names(), vec!["Item 1", "Item 2", "Eggs"]);
        assert_eq!(result.affected_items[0].index, 3);
        assert_eq!(result.affected_items[0].item.quantity, 12);
    }

    #[test]
    fn missing_quantity_defaults_to_one() {
        let fixture = StoreFixture::new();
        run(&fixture.store, "Bread", None).unwrap();
        assert_eq!(fixture.store.list().unwrap()[0].quantity, 1);
    }

    #[test]
    fn rejects_blank_name_without_touching_store() {
        let fixture = StoreFixture::new().with_items(1);
        let writes = fixture.store.backend().write_count();

        let result = run(&fixture.store, "   ", Some("3")).unwrap();

        assert!(result.has_errors());
        assert!(result.affected_items.is_empty());
        assert_eq!(fixture.store.backend().write_count(), writes);
        assert_eq!(fixture.names(), vec!["Item 1"]);
        assert_eq!(result.stats.unwrap().total, 1);
    }

    #[test]
    fn stats_are_recounted() {
        let fixture = StoreFixture::new().with_purchased("Rice", 1);
        let stats = run(&fixture.store, "Beans", None).unwrap().stats.unwrap();
        assert_eq!((stats.pending, stats.purchased, stats.total), (1, 1, 2));
    }
}
