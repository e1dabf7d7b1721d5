//! # Shoplist Architecture
//!
//! Shoplist is a **UI-agnostic shopping list library**. It is a library that
//! happens to have a CLI client, not a CLI with some library code in it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions, ranges, id: selectors)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and business logic                            │
//! │  - Returns CmdResult with messages and a stats recount      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore repository over a StorageBackend               │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sorting ([`sort`]) and the text export format ([`codec`]) are pure
//! functions used by the commands.
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, never prints and never exits. Logging goes through
//! `tracing`; the binary decides where it ends up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage backends and the item repository
//! - [`model`]: Core data types (`Item`, `ItemPatch`, `Theme`, `Stats`)
//! - [`sort`]: Sort orders and accent-insensitive collation
//! - [`codec`]: `name;quantity;purchased` export/import format
//! - [`index`]: Display positions and item selectors
//! - [`config`]: Client configuration
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod sort;
pub mod store;
