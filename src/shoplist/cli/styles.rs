use console::Style;
use once_cell::sync::Lazy;
use shoplist::model::Theme;
use std::collections::HashMap;

/// Semantic style names used by the templates.
pub mod names {
    pub const INDEX: &str = "index";
    pub const MARKER_DONE: &str = "marker-done";
    pub const MARKER_TODO: &str = "marker-todo";
    pub const NAME: &str = "name";
    pub const NAME_DONE: &str = "name-done";
    pub const QUANTITY: &str = "quantity";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const PENDING: &str = "pending";
    pub const PURCHASED: &str = "purchased";
    pub const STATS_LABEL: &str = "stats-label";
    pub const STATS_TOTAL: &str = "stats-total";
    pub const CONFIG_KEY: &str = "config-key";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub type Palette = HashMap<&'static str, Style>;

static LIGHT: Lazy<Palette> = Lazy::new(|| {
    HashMap::from([
        (names::INDEX, Style::new().color256(244)),
        (names::MARKER_DONE, Style::new().green()),
        (names::MARKER_TODO, Style::new().color256(240)),
        (names::NAME, Style::new().black().bold()),
        (names::NAME_DONE, Style::new().color256(246).strikethrough()),
        (names::QUANTITY, Style::new().blue()),
        (names::MUTED, Style::new().color256(244).italic()),
        (names::FAINT, Style::new().color256(250)),
        (names::PENDING, Style::new().yellow()),
        (names::PURCHASED, Style::new().green()),
        (names::STATS_LABEL, Style::new().color256(244)),
        (names::STATS_TOTAL, Style::new().bold()),
        (names::CONFIG_KEY, Style::new().cyan()),
        (names::INFO, Style::new().color256(244)),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow()),
        (names::ERROR, Style::new().red().bold()),
    ])
});

static DARK: Lazy<Palette> = Lazy::new(|| {
    HashMap::from([
        (names::INDEX, Style::new().color256(245)),
        (names::MARKER_DONE, Style::new().color256(114)),
        (names::MARKER_TODO, Style::new().color256(250)),
        (names::NAME, Style::new().white().bold()),
        (names::NAME_DONE, Style::new().color256(242).strikethrough()),
        (names::QUANTITY, Style::new().color256(111)),
        (names::MUTED, Style::new().color256(245).italic()),
        (names::FAINT, Style::new().color256(238)),
        (names::PENDING, Style::new().color256(221)),
        (names::PURCHASED, Style::new().color256(114)),
        (names::STATS_LABEL, Style::new().color256(245)),
        (names::STATS_TOTAL, Style::new().white().bold()),
        (names::CONFIG_KEY, Style::new().color256(117)),
        (names::INFO, Style::new().color256(250)),
        (names::SUCCESS, Style::new().color256(114)),
        (names::WARNING, Style::new().color256(221)),
        (names::ERROR, Style::new().color256(203).bold()),
    ])
});

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
