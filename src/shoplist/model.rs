use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Quantity used whenever the input is missing, non-numeric or not positive.
pub const DEFAULT_QUANTITY: u32 = 1;

/// A single entry on the shopping list.
///
/// The serialized shape (`id`, `name`, `quantity`, `purchased`) is the persisted
/// format. Older lists wrote the purchased flag as `comprado`, which is still
/// accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    #[serde(default, alias = "comprado")]
    pub purchased: bool,
}

impl Item {
    /// Creates a pending item with a fresh id.
    ///
    /// The name is stored trimmed; a zero quantity is bumped to the default.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self::with_id(new_item_id(), name, quantity)
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into().trim().to_string(),
            quantity: quantity.max(DEFAULT_QUANTITY),
            purchased: false,
        }
    }

    pub fn purchased(mut self, purchased: bool) -> Self {
        self.purchased = purchased;
        self
    }
}

/// Generates an opaque item id.
///
/// Ids are random (UUID v4) rather than derived from the clock, so two items
/// created in the same millisecond never collide.
pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Coerces raw user input into a quantity.
///
/// Anything that is not a positive integer after trimming becomes
/// [`DEFAULT_QUANTITY`].
pub fn coerce_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_QUANTITY,
    }
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(quantity_from_value(&value).unwrap_or(DEFAULT_QUANTITY))
}

/// Reads a persisted quantity value.
///
/// Returns `None` when the value is not already a valid quantity and has to be
/// coerced. Floats are truncated toward zero before the check.
pub(crate) fn quantity_from_value(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => match n.as_u64() {
            Some(n) => n,
            None => {
                let f = n.as_f64()?;
                if f < 1.0 {
                    return None;
                }
                f.trunc() as u64
            }
        },
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    u32::try_from(n).ok().filter(|n| *n > 0)
}

/// A partial update applied by the repository's `update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub purchased: Option<bool>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn purchased(mut self, purchased: bool) -> Self {
        self.purchased = Some(purchased);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.purchased.is_none()
    }

    /// The trimmed name carried by this patch, if any.
    pub fn trimmed_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim)
    }

    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = self.trimmed_name() {
            item.name = name.to_string();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity.max(DEFAULT_QUANTITY);
        }
        if let Some(purchased) = self.purchased {
            item.purchased = purchased;
        }
    }
}

/// Color theme preference, persisted next to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Reads a stored preference. Only the exact string `dark` selects the dark
    /// theme; anything else, including a missing value, is light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {} (expected light or dark)", other)),
        }
    }
}

/// Counters shown under the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub pending: usize,
    pub purchased: usize,
    pub total: usize,
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let purchased = items.iter().filter(|i| i.purchased).count();
        Self {
            pending: total - purchased,
            purchased,
            total,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pending: {} | Purchased: {} | Total: {}",
            self.pending, self.purchased, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_trims_name_and_is_pending() {
        let item = Item::new("  Milk  ", 2);
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2);
        assert!(!item.purchased);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn new_item_bumps_zero_quantity() {
        assert_eq!(Item::new("Eggs", 0).quantity, 1);
    }

    #[test]
    fn ids_are_unique_across_rapid_creation() {
        let ids: std::collections::HashSet<_> =
            (0..500).map(|_| Item::new("x", 1).id).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn coerce_quantity_defaults_on_bad_input() {
        assert_eq!(coerce_quantity("3"), 3);
        assert_eq!(coerce_quantity(" 7 "), 7);
        assert_eq!(coerce_quantity("abc"), 1);
        assert_eq!(coerce_quantity(""), 1);
        assert_eq!(coerce_quantity("0"), 1);
        assert_eq!(coerce_quantity("-4"), 1);
        assert_eq!(coerce_quantity("2.5"), 1);
    }

    #[test]
    fn deserializes_legacy_comprado_field() {
        let json = r#"{"id":"1700000000000","name":"Arroz","quantity":2,"comprado":true}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.purchased);
        assert_eq!(item.id, "1700000000000");
    }

    #[test]
    fn deserializes_odd_quantities_leniently() {
        let cases = [
            (r#""3""#, 3),
            ("null", 1),
            ("0", 1),
            ("-2", 1),
            ("2.9", 2),
            (r#""abc""#, 1),
            ("4294967296", 1),
        ];
        for (raw, expected) in cases {
            let json = format!(r#"{{"id":"a","name":"n","quantity":{}}}"#, raw);
            let item: Item = serde_json::from_str(&json).unwrap();
            assert_eq!(item.quantity, expected, "quantity {}", raw);
        }
    }

    #[test]
    fn missing_quantity_and_flag_use_defaults() {
        let item: Item = serde_json::from_str(r#"{"id":"a","name":"n"}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert!(!item.purchased);
    }

    #[test]
    fn serializes_with_purchased_field() {
        let item = Item::with_id("a", "Pão", 1).purchased(true);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":"a","name":"Pão","quantity":1,"purchased":true}"#
        );
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut item = Item::with_id("a", "Milk", 2);
        ItemPatch::new().name("  Oat milk ").apply_to(&mut item);
        assert_eq!(item.name, "Oat milk");
        assert_eq!(item.quantity, 2);

        ItemPatch::new().purchased(true).apply_to(&mut item);
        assert!(item.purchased);
        assert_eq!(item.name, "Oat milk");
    }

    #[test]
    fn theme_from_stored_defaults_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn stats_count_partitions() {
        let items = vec![
            Item::new("a", 1).purchased(true),
            Item::new("b", 1),
            Item::new("c", 1),
        ];
        let stats = Stats::from_items(&items);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.purchased, 1);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.to_string(), "Pending: 2 | Purchased: 1 | Total: 3");
    }
}
