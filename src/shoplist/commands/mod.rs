//! # Command Layer
//!
//! This module contains the **core business logic** of shoplist. Each command
//! lives in its own submodule and exposes plain functions over an
//! [`ItemStore`](crate::store::ItemStore).
//!
//! ## Role and Responsibilities
//!
//! A command validates and normalizes its input, performs the repository
//! operation, and returns a structured [`CmdResult`]. Every command finishes by
//! recounting [`Stats`] from the store, so clients can always refresh the
//! counters shown under the list.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal output**: no printing, colors or formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! Commands may touch the filesystem when the operation is about files
//! (`export`, `import`, `config`); the item collection itself is only ever
//! reached through the store.
//!
//! ## Validation vs Failure
//!
//! User mistakes (an empty name, an id that does not exist) come back as an
//! `Ok(CmdResult)` carrying an error or warning message, with the store left
//! untouched. `Err` is reserved for real failures: I/O, serialization, or a
//! position that is out of range.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests run on
//! [`MemBackend`](crate::store::mem_backend::MemBackend) through
//! [`StoreFixture`](crate::store::fixtures::StoreFixture).
//!
//! ## Command Modules
//!
//! - [`add`]: Append a new item
//! - [`list`]: List items and stats
//! - [`edit`]: Rename or change the quantity of an item
//! - [`toggle`]: Flip or set the purchased flag
//! - [`delete`]: Remove items
//! - [`clear`]: Remove everything
//! - [`sort`]: Reorder and persist
//! - [`export`]: Write the text export
//! - [`import`]: Replace the list from a text export
//! - [`theme`]: Show, set or toggle the theme
//! - [`config`]: Manage client configuration
//! - [`doctor`]: Inspect and repair stored data
//! - [`helpers`]: Shared utilities (selector resolution, stats)

use crate::config::ShoplistConfig;
use crate::index::DisplayItem;
use crate::model::{Stats, Theme};
use crate::store::StoreHealth;
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod doctor;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod sort;
pub mod theme;
pub mod toggle;

#[derive(Debug, Clone)]
pub struct ShoplistPaths {
    /// Root of all shoplist data: `config.json` and the `store/` directory.
    pub data_dir: PathBuf,
}

impl ShoplistPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items created or changed by the command, with their post-command index.
    pub affected_items: Vec<DisplayItem>,
    /// Items to display (for `list` and `sort`).
    pub listed_items: Vec<DisplayItem>,
    /// Counters after the command ran. Always set by [`helpers::finish`].
    pub stats: Option<Stats>,
    pub theme: Option<Theme>,
    /// Export text destined for stdout.
    pub exported_text: Option<String>,
    /// File an export was written to.
    pub export_path: Option<PathBuf>,
    pub config: Option<ShoplistConfig>,
    pub health: Option<StoreHealth>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: ShoplistConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_health(mut self, health: StoreHealth) -> Self {
        self.health = Some(health);
        self
    }

    /// True if any message is at error level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
