//! # Rendering
//!
//! Terminal output is produced by minijinja templates (see `templates`) through
//! a `style` filter that maps semantic names onto the palette of the current
//! theme.
//!
//! Layout stays in Rust: index alignment, name truncation and padding need
//! Unicode-aware width math, so rows reach the templates precomputed. The
//! templates only pick styles.

use super::styles::{names, palette, Palette};
use super::templates::{CONFIG_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE};
use minijinja::{Environment, Value};
use serde::Serialize;
use shoplist::commands::CmdMessage;
use shoplist::index::DisplayItem;
use shoplist::model::{Stats, Theme};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Names wider than this are cut with an ellipsis.
pub const NAME_WIDTH: usize = 40;
pub const DONE_MARKER: &str = "[x]";
pub const TODO_MARKER: &str = "[ ]";
pub const EMPTY_LIST_MESSAGE: &str = "Your list is empty. Add something with `shoplist add <name>`.";

/// Prepended to text whose style name is not in the palette.
const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Serialize)]
struct ItemRow {
    index: String,
    marker: &'static str,
    marker_style: &'static str,
    name: String,
    name_style: &'static str,
    padding: String,
    quantity: String,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<ItemRow>,
    empty: bool,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: &'a [CmdMessage],
}

#[derive(Serialize)]
struct StatsData<'a> {
    stats: &'a Stats,
}

#[derive(Serialize)]
struct ConfigEntry<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct ConfigData<'a> {
    entries: Vec<ConfigEntry<'a>>,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_style_filter(&mut env, palette(theme), use_color);
        Self { env }
    }

    pub fn render_list(&self, items: &[DisplayItem]) -> String {
        let data = ListData {
            rows: build_rows(items),
            empty: items.is_empty(),
            empty_message: EMPTY_LIST_MESSAGE,
        };
        self.render(LIST_TEMPLATE, &data)
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        self.render(MESSAGES_TEMPLATE, &MessagesData { messages })
    }

    pub fn render_stats(&self, stats: &Stats) -> String {
        self.render(STATS_TEMPLATE, &StatsData { stats })
    }

    pub fn render_config(&self, entries: &[(&str, String)]) -> String {
        let data = ConfigData {
            entries: entries
                .iter()
                .map(|(key, value)| ConfigEntry {
                    key: *key,
                    value: value.as_str(),
                })
                .collect(),
        };
        self.render(CONFIG_TEMPLATE, &data)
    }

    fn render<S: Serialize>(&self, template: &str, data: &S) -> String {
        self.env
            .render_str(template, data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }
}

fn register_style_filter(
    env: &mut Environment<'static>,
    styles: &'static Palette,
    use_color: bool,
) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match styles.get(name.as_str()) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text,
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    });
}

fn build_rows(items: &[DisplayItem]) -> Vec<ItemRow> {
    let index_width = items
        .iter()
        .map(|d| d.index.to_string().len())
        .max()
        .unwrap_or(1);
    let shown: Vec<String> = items
        .iter()
        .map(|d| truncate_to_width(&d.item.name, NAME_WIDTH))
        .collect();
    let name_width = shown.iter().map(|n| n.width()).max().unwrap_or(0);

    items
        .iter()
        .zip(shown)
        .map(|(d, name)| {
            let padding = " ".repeat(name_width - name.width() + 2);
            let (marker, marker_style, name_style) = if d.item.purchased {
                (DONE_MARKER, names::MARKER_DONE, names::NAME_DONE)
            } else {
                (TODO_MARKER, names::MARKER_TODO, names::NAME)
            };
            ItemRow {
                index: format!("{:>width$}.", d.index, width = index_width),
                marker,
                marker_style,
                name,
                name_style,
                padding,
                quantity: format!("x{}", d.item.quantity),
            }
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
