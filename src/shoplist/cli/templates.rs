//! # CLI Templates
//!
//! Output is rendered from stand-alone minijinja templates, kept as files so
//! they are easy to edit and diff, and embedded here with `include_str!()`.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so block tags
//! on their own line leave no blank lines behind. Every output line is written
//! out explicitly in the template.
//!
//! Templates only name semantic styles (`index`, `purchased`, `warning`, ...)
//! through the `style` filter. Which colors those map to is decided by the
//! palette in `styles`.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
