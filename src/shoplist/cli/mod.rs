//! # CLI Behavior
//!
//! This is **one possible UI client** for shoplist, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution
//!
//! Running `shoplist` with no arguments is `shoplist list`: the list followed
//! by its counters.
//!
//! ## Feedback After Every Command
//!
//! Every command prints its messages and then the `Pending | Purchased |
//! Total` line, so the counters are always current.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Template rendering with a `style` filter
//! - `styles`: Light and dark palettes
//! - `templates`: Embedded template sources

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
