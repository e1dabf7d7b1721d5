//! # Storage Layer
//!
//! Two levels live here:
//!
//! - [`StorageBackend`]: raw key-value persistence. [`fs_backend::FsBackend`] is
//!   the production backend (one file per key, atomic writes) and
//!   [`mem_backend::MemBackend`] is the in-memory double used by tests.
//! - [`ItemStore`]: the item repository. It owns a backend and exposes the
//!   collection operations (`list`, `add`, `update`, `remove`, `clear`, ...).
//!
//! ## Persisted Layout
//!
//! | key     | value                                             |
//! |---------|---------------------------------------------------|
//! | `list`  | JSON array of `{id, name, quantity, purchased}`   |
//! | `theme` | `light` or `dark`                                 |
//!
//! A missing `list` key is an empty collection. The stored array order *is* the
//! list order, so sorting rewrites it.
//!
//! ## No Write-Behind
//!
//! `ItemStore` keeps nothing in memory between calls. Every mutation reads the
//! whole collection, changes it and writes it back. Two processes writing at
//! once will clobber each other (last write wins); shoplist assumes a single
//! writer.
//!
//! ## Corrupted Data
//!
//! A `list` value that fails to deserialize is treated as an empty collection
//! by [`ItemStore::list`], logged at `warn`, and left in place untouched until
//! the next write. [`ItemStore::inspect`] reports it and the `doctor` command
//! moves it aside.

use crate::error::{Result, ShoplistError};
use crate::model::{quantity_from_value, Item, ItemPatch, Stats, Theme};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

pub const LIST_KEY: &str = "list";
pub const THEME_KEY: &str = "theme";
/// Where `doctor` parks a `list` value it could not parse.
pub const CORRUPT_LIST_KEY: &str = "list.corrupt";

/// Problems found in the persisted collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreHealth {
    pub corrupt_blob: bool,
    pub duplicate_ids: Vec<String>,
    pub empty_names: usize,
    pub coerced_quantities: usize,
    pub total: usize,
}

impl StoreHealth {
    pub fn is_healthy(&self) -> bool {
        !self.corrupt_blob
            && self.duplicate_ids.is_empty()
            && self.empty_names == 0
            && self.coerced_quantities == 0
    }
}

enum Collection {
    Missing,
    Loaded(Vec<Item>),
    Corrupt(String),
}

/// The item repository.
pub struct ItemStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ItemStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read_collection(&self) -> Result<Collection> {
        let Some(raw) = self.backend.get(LIST_KEY)? else {
            return Ok(Collection::Missing);
        };
        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => Ok(Collection::Loaded(items)),
            Err(e) => {
                warn!(error = %e, "stored list is unreadable; treating it as empty");
                Ok(Collection::Corrupt(raw))
            }
        }
    }

    fn write(&self, items: &[Item]) -> Result<()> {
        let json = serde_json::to_string(items).map_err(ShoplistError::Serialization)?;
        self.backend.set(LIST_KEY, &json)?;
        debug!(count = items.len(), "persisted list");
        Ok(())
    }

    /// All items in persisted order.
    ///
    /// Never fails on unreadable data: a corrupted collection reads as empty.
    /// Backend I/O errors are still returned.
    pub fn list(&self) -> Result<Vec<Item>> {
        match self.read_collection()? {
            Collection::Loaded(items) => Ok(items),
            Collection::Missing | Collection::Corrupt(_) => Ok(Vec::new()),
        }
    }

    pub fn find(&self, id: &str) -> Result<Option<Item>> {
        Ok(self.list()?.into_iter().find(|item| item.id == id))
    }

    /// Appends an item. The id must not already be in use.
    pub fn add(&self, item: Item) -> Result<()> {
        if item.name.trim().is_empty() {
            return Err(ShoplistError::EmptyName);
        }
        let mut items = self.list()?;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(ShoplistError::DuplicateId(item.id));
        }
        items.push(item);
        self.write(&items)
    }

    /// Merges `patch` into the item with `id`, or inserts a new item under that
    /// id when none exists (quantity and purchased take their defaults unless
    /// the patch sets them).
    ///
    /// A patch whose name trims to empty is rejected, and so is an insert
    /// without a name.
    pub fn update(&self, id: &str, patch: &ItemPatch) -> Result<Item> {
        if patch.trimmed_name().is_some_and(str::is_empty) {
            return Err(ShoplistError::EmptyName);
        }

        let mut items = self.list()?;
        let updated = match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                patch.apply_to(item);
                item.clone()
            }
            None => {
                let name = patch.trimmed_name().ok_or(ShoplistError::EmptyName)?;
                let mut item = Item::with_id(id, name, 1);
                patch.apply_to(&mut item);
                debug!(id, "update on unknown id, inserting");
                items.push(item.clone());
                item
            }
        };
        self.write(&items)?;
        Ok(updated)
    }

    /// Removes the item with `id`. Returns whether anything was removed;
    /// an unknown id leaves the collection unchanged.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.write(&items)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(LIST_KEY)
    }

    pub fn set_purchased(&self, id: &str, purchased: bool) -> Result<Item> {
        if self.find(id)?.is_none() {
            return Err(ShoplistError::ItemNotFound(id.to_string()));
        }
        self.update(id, &ItemPatch::new().purchased(purchased))
    }

    /// Persists `items` as the whole collection, in the given order.
    pub fn replace_all(&self, items: &[Item]) -> Result<()> {
        let mut seen = HashSet::new();
        for item in items {
            if item.name.trim().is_empty() {
                return Err(ShoplistError::EmptyName);
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ShoplistError::DuplicateId(item.id.clone()));
            }
        }
        self.write(items)
    }

    /// Persists a new order of the stored items.
    ///
    /// The items are not revalidated, only required to be exactly the stored
    /// ones, so lists written by older versions (duplicate ids, empty names)
    /// can still be sorted. `doctor` is what repairs those.
    pub fn reorder(&self, items: &[Item]) -> Result<()> {
        if !same_items(&self.list()?, items) {
            return Err(ShoplistError::Store(
                "Reordered list does not match the stored items".to_string(),
            ));
        }
        self.write(items)
    }

    pub fn stats(&self) -> Result<Stats> {
        Ok(Stats::from_items(&self.list()?))
    }

    pub fn theme(&self) -> Result<Theme> {
        let raw = self.backend.get(THEME_KEY)?;
        Ok(Theme::from_stored(raw.as_deref().map(str::trim)))
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.backend.set(THEME_KEY, theme.as_str())
    }

    /// Reports problems in the stored collection without changing it.
    pub fn inspect(&self) -> Result<StoreHealth> {
        let raw = match self.read_collection()? {
            Collection::Missing => return Ok(StoreHealth::default()),
            Collection::Corrupt(_) => {
                return Ok(StoreHealth {
                    corrupt_blob: true,
                    ..StoreHealth::default()
                })
            }
            Collection::Loaded(items) => items,
        };

        let mut health = StoreHealth {
            total: raw.len(),
            ..StoreHealth::default()
        };

        let mut seen = HashSet::new();
        for item in &raw {
            if !seen.insert(item.id.as_str()) && !health.duplicate_ids.contains(&item.id) {
                health.duplicate_ids.push(item.id.clone());
            }
            if item.name.trim().is_empty() {
                health.empty_names += 1;
            }
        }

        // Quantities were already coerced while deserializing; look at the raw
        // values to count how many needed it.
        if let Some(stored) = self.backend.get(LIST_KEY)? {
            if let Ok(Value::Array(values)) = serde_json::from_str::<Value>(&stored) {
                health.coerced_quantities = values
                    .iter()
                    .filter(|v| {
                        !matches!(v.get("quantity"), Some(q) if q.is_u64() && quantity_from_value(q).is_some())
                    })
                    .count();
            }
        }

        Ok(health)
    }

    /// Moves an unreadable `list` value to [`CORRUPT_LIST_KEY`] and leaves an
    /// empty collection behind. Returns false if the list was readable.
    pub fn quarantine_corrupt(&self) -> Result<bool> {
        let Collection::Corrupt(raw) = self.read_collection()? else {
            return Ok(false);
        };
        self.backend.set(CORRUPT_LIST_KEY, &raw)?;
        self.backend.remove(LIST_KEY)?;
        warn!(key = CORRUPT_LIST_KEY, "moved unreadable list aside");
        Ok(true)
    }
}

/// True if `a` and `b` hold the same items, in any order.
fn same_items(a: &[Item], b: &[Item]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let key = |item: &Item| {
        (
            item.id.clone(),
            item.name.clone(),
            item.quantity,
            item.purchased,
        )
    };
    let mut left: Vec<_> = a.iter().map(key).collect();
    let mut right: Vec<_> = b.iter().map(key).collect();
    left.sort();
    right.sort();
    left == right
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use super::*;

    pub struct StoreFixture {
        pub store: ItemStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: ItemStore::new(MemBackend::new()),
            }
        }

        /// Starts from a raw `list` value, e.g. legacy or broken JSON.
        pub fn with_raw_list(raw: &str) -> Self {
            Self {
                store: ItemStore::new(MemBackend::new().with_value(LIST_KEY, raw)),
            }
        }

        pub fn with_items(self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .add(Item::new(format!("Item {}", i + 1), 1))
                    .unwrap();
            }
            self
        }

        pub fn with_pending(self, name: &str, quantity: u32) -> Self {
            self.store.add(Item::new(name, quantity)).unwrap();
            self
        }

        pub fn with_purchased(self, name: &str, quantity: u32) -> Self {
            self.store
                .add(Item::new(name, quantity).purchased(true))
                .unwrap();
            self
        }

        pub fn names(&self) -> Vec<String> {
            self.store
                .list()
                .unwrap()
                .into_iter()
                .map(|item| item.name)
                .collect()
        }
    }
}
