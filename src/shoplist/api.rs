//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for shoplist operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: user selectors (`3`, `2-4`, `id:<token>`) are parsed
//!   into [`ItemSelector`]s here, so commands never see raw strings
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business logic belongs in `commands/*.rs`; presentation belongs to the
//! client.
//!
//! ## Generic Over StorageBackend
//!
//! `ShoplistApi<B: StorageBackend>` runs on `FsBackend` in production and on
//! `MemBackend` in tests, so the whole command surface is testable without a
//! filesystem.

use crate::commands::{
    self, config::ConfigAction, export::ExportTarget, import::ImportSource, theme::ThemeAction,
    CmdResult, ShoplistPaths,
};
use crate::error::{Result, ShoplistError};
use crate::index::{self, ItemSelector};
use crate::sort::SortOrder;
use crate::store::{ItemStore, StorageBackend};
use chrono::NaiveDate;

/// The main API facade for shoplist operations.
pub struct ShoplistApi<B: StorageBackend> {
    store: ItemStore<B>,
    paths: ShoplistPaths,
}

impl<B: StorageBackend> ShoplistApi<B> {
    pub fn new(store: ItemStore<B>, paths: ShoplistPaths) -> Self {
        Self { store, paths }
    }

    pub fn store(&self) -> &ItemStore<B> {
        &self.store
    }

    pub fn paths(&self) -> &ShoplistPaths {
        &self.paths
    }

    pub fn add_item(&self, name: &str, quantity: Option<&str>) -> Result<CmdResult> {
        commands::add::run(&self.store, name, quantity)
    }

    pub fn list_items(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::list::stats(&self.store)
    }

    pub fn edit_item(
        &self,
        selector: &str,
        name: Option<&str>,
        quantity: Option<&str>,
    ) -> Result<CmdResult> {
        let selector = parse_single_selector(selector)?;
        commands::edit::run(&self.store, &selector, name, quantity)
    }

    pub fn toggle_items<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::toggle::run(&self.store, &selectors)
    }

    pub fn check_items<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::toggle::set(&self.store, &selectors, true)
    }

    pub fn uncheck_items<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::toggle::set(&self.store, &selectors, false)
    }

    pub fn delete_items<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&self.store, &selectors)
    }

    pub fn clear(&self) -> Result<CmdResult> {
        commands::clear::run(&self.store)
    }

    pub fn sort(&self, order: SortOrder) -> Result<CmdResult> {
        commands::sort::run(&self.store, order)
    }

    pub fn export(&self, target: ExportTarget, today: NaiveDate) -> Result<CmdResult> {
        commands::export::run(&self.store, target, today)
    }

    pub fn import(&self, source: ImportSource) -> Result<CmdResult> {
        commands::import::run(&self.store, source)
    }

    pub fn theme(&self, action: ThemeAction) -> Result<CmdResult> {
        commands::theme::run(&self.store, action)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn doctor(&self) -> Result<CmdResult> {
        commands::doctor::run(&self.store)
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ItemSelector>> {
    if inputs.is_empty() {
        return Err(ShoplistError::Api("No items selected".to_string()));
    }
    index::parse_selectors(inputs).map_err(ShoplistError::Api)
}

fn parse_single_selector(input: &str) -> Result<ItemSelector> {
    match index::parse_selector_or_range(input).map_err(ShoplistError::Api)? {
        ItemSelector::Range(..) => Err(ShoplistError::Api(format!(
            "Expected a single item, got the range \"{}\"",
            input.trim()
        ))),
        selector => Ok(selector),
    }
}
