//! Menu Item Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient_price, null_as_default};

/// Category preselected when the staging inputs are cleared
pub const DEFAULT_MENU_CATEGORY: &str = "starters";

/// Menu item entity, owned by exactly one branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Opaque `id_xxxxxxx` token, immutable once issued
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// No lower bound is enforced; null or non-numeric reads as 0
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
}

/// Raw menu inputs as typed by an admin (the "staging area")
///
/// `price` stays textual until it is coerced on add/update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemInput {
    pub category: String,
    pub name: String,
    pub price: String,
    pub desc: String,
}

impl MenuItemInput {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            price: price.into(),
            desc: desc.into(),
        }
    }

    /// Empty inputs with the default category selected
    pub fn cleared() -> Self {
        Self {
            category: DEFAULT_MENU_CATEGORY.to_string(),
            ..Self::default()
        }
    }

    /// Coerced price, 0 for empty or non-numeric input
    pub fn price_value(&self) -> f64 {
        coerce_price(&self.price)
    }
}

impl From<&MenuItem> for MenuItemInput {
    fn from(item: &MenuItem) -> Self {
        Self {
            category: item.category.clone(),
            name: item.name.clone(),
            price: format_price(item.price),
            desc: item.desc.clone(),
        }
    }
}

/// Coerce free-text price input to a number.
///
/// Empty, non-numeric and non-finite input all become 0.
pub fn coerce_price(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Render a price without a trailing `.0` (165.0 -> "165", 99.5 -> "99.5")
pub fn format_price(price: f64) -> String {
    format!("{price}")
}
