//! Menu configuration.
//!
//! A menu is a JSON document naming base items, toppings and orders. An order picks one
//! base and lists toppings innermost first:
//!
//! ```json
//! {
//!   "bases":    [{ "name": "espresso", "cost": 10, "label": "Espresso" }],
//!   "toppings": [{ "name": "milk", "delta": 5, "suffix": ", Milk" }],
//!   "orders":   [{ "name": "latte", "base": "espresso", "toppings": ["milk"] }]
//! }
//! ```
//!
//! All names are resolved when an order is built, so a typo in a menu surfaces as a
//! [`MenuError`] rather than as a wrong price.

use crate::chain::{Chain, ChainBuildError};
use crate::decorated::Topping;
use crate::item::BaseItem;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

static BUILTIN_MENU: &str = include_str!("../resources/menu.json");

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid menu: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("base `{0}` is declared more than once")]
    DuplicateBase(String),

    #[error("topping `{0}` is declared more than once")]
    DuplicateTopping(String),

    #[error("order `{0}` is declared more than once")]
    DuplicateOrder(String),

    #[error("order `{order}` refers to unknown base `{base}`")]
    UnknownBase { order: String, base: String },

    #[error("order `{order}` refers to unknown topping `{topping}`")]
    UnknownTopping { order: String, topping: String },

    #[error("unknown order `{0}`")]
    UnknownOrder(String),

    #[error("chain error: {source}")]
    Chain {
        #[from]
        source: ChainBuildError,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    pub bases: Vec<BaseConfig>,
    #[serde(default)]
    pub toppings: Vec<ToppingConfig>,
    #[serde(default)]
    pub orders: Vec<OrderConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    pub name: String,
    pub cost: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToppingConfig {
    pub name: String,
    pub delta: f64,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderConfig {
    pub name: String,
    pub base: String,
    #[serde(default)]
    pub toppings: Vec<String>,
}

impl MenuConfig {
    pub fn from_json_str(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| MenuError::Io { path: path.to_path_buf(), source })?;
        info!(path = %path.display(), "loading menu");
        Self::from_json_str(&json)
    }
}

/// A validated menu, able to build any of its orders.
#[derive(Debug, Clone)]
pub struct Menu {
    bases: HashMap<String, BaseItem>,
    toppings: HashMap<String, Topping>,
    orders: Vec<OrderConfig>,
}

impl Menu {
    /// The menu bundled with this crate.
    pub fn builtin() -> Result<Self, MenuError> {
        Self::try_from(MenuConfig::from_json_str(BUILTIN_MENU)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MenuError> {
        Self::try_from(MenuConfig::from_path(path)?)
    }

    /// Order names, in declaration order.
    pub fn order_names(&self) -> impl Iterator<Item = &str> {
        self.orders.iter().map(|order| order.name.as_str())
    }

    /// Builds the chain of the named order.
    pub fn order(&self, name: &str) -> Result<Chain, MenuError> {
        let order = self
            .orders
            .iter()
            .find(|order| order.name == name)
            .ok_or_else(|| MenuError::UnknownOrder(name.to_string()))?;
        self.build(order)
    }

    /// Builds an ad-hoc order from a base name and topping names.
    pub fn custom<S: AsRef<str>>(&self, base: &str, toppings: &[S]) -> Result<Chain, MenuError> {
        let order = OrderConfig {
            name: String::from("custom"),
            base: base.to_string(),
            toppings: toppings.iter().map(|topping| topping.as_ref().to_string()).collect(),
        };
        self.build(&order)
    }

    fn build(&self, order: &OrderConfig) -> Result<Chain, MenuError> {
        let base = self
            .bases
            .get(&order.base)
            .ok_or_else(|| MenuError::UnknownBase { order: order.name.clone(), base: order.base.clone() })?;

        let toppings = order
            .toppings
            .iter()
            .map(|name| {
                self.toppings
                    .get(name)
                    .cloned()
                    .ok_or_else(|| MenuError::UnknownTopping { order: order.name.clone(), topping: name.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(order = %order.name, base = %order.base, toppings = ?order.toppings, "building order");
        Ok(Chain::builder().base(base.clone()).toppings(toppings).build()?)
    }
}

impl TryFrom<MenuConfig> for Menu {
    type Error = MenuError;

    fn try_from(config: MenuConfig) -> Result<Self, Self::Error> {
        let mut bases = HashMap::with_capacity(config.bases.len());
        for base in config.bases {
            if bases.contains_key(&base.name) {
                return Err(MenuError::DuplicateBase(base.name));
            }
            bases.insert(base.name, BaseItem::new(base.cost, base.label));
        }

        let mut toppings = HashMap::with_capacity(config.toppings.len());
        for topping in config.toppings {
            if toppings.contains_key(&topping.name) {
                return Err(MenuError::DuplicateTopping(topping.name));
            }
            toppings.insert(topping.name, Topping::new(topping.delta, topping.suffix));
        }

        let mut order_names = HashSet::with_capacity(config.orders.len());
        for order in &config.orders {
            if !order_names.insert(order.name.as_str()) {
                return Err(MenuError::DuplicateOrder(order.name.clone()));
            }
        }

        Ok(Menu { bases, toppings, orders: config.orders })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, Snapshot};
    use indoc::indoc;

    const MENU: &str = indoc! {r#"
        {
          "bases": [
            { "name": "espresso", "cost": 10, "label": "Espresso" },
            { "name": "ice_cream", "cost": 20, "label": "Ice Cream" }
          ],
          "toppings": [
            { "name": "milk", "delta": 5, "suffix": ", Milk" },
            { "name": "whip", "delta": 7, "suffix": ", Whip" }
          ],
          "orders": [
            { "name": "capuccino", "base": "espresso", "toppings": ["milk", "whip"] },
            { "name": "plain", "base": "ice_cream" },
            { "name": "broken", "base": "espresso", "toppings": ["sprinkles"] }
          ]
        }
    "#};

    fn menu() -> Menu {
        Menu::try_from(MenuConfig::from_json_str(MENU).unwrap()).unwrap()
    }

    #[test]
    fn test_parse() {
        let config = MenuConfig::from_json_str(MENU).unwrap();

        assert_eq!(config.bases.len(), 2);
        assert_eq!(config.toppings[1], ToppingConfig { name: "whip".into(), delta: 7.0, suffix: ", Whip".into() });
        assert!(config.orders[1].toppings.is_empty());
    }

    #[test]
    fn test_order() {
        let chain = menu().order("capuccino").unwrap();

        assert_eq!(chain.cost(), 22.0);
        assert_eq!(chain.label(), "Espresso, Milk, Whip");
    }

    #[test]
    fn test_order_without_toppings() {
        let chain = menu().order("plain").unwrap();

        assert_eq!(Snapshot::of(&chain), Snapshot { cost: 20.0, label: "Ice Cream".into() });
    }

    #[test]
    fn test_order_names() {
        let menu = menu();

        assert_eq!(menu.order_names().collect::<Vec<_>>(), vec!["capuccino", "plain", "broken"]);
    }

    #[test]
    fn test_custom_order() {
        let chain = menu().custom("espresso", &["whip", "milk"]).unwrap();

        assert_eq!(chain.label(), "Espresso, Whip, Milk");
        assert_eq!(chain.cost(), 22.0);
    }

    #[test]
    fn test_unknown_topping() {
        let error = menu().order("broken").unwrap_err();

        assert!(matches!(error, MenuError::UnknownTopping { ref order, ref topping } if order == "broken" && topping == "sprinkles"));
    }

    #[test]
    fn test_unknown_base() {
        let error = menu().custom::<&str>("tea", &[]).unwrap_err();

        assert!(matches!(error, MenuError::UnknownBase { ref base, .. } if base == "tea"));
    }

    #[test]
    fn test_unknown_order() {
        let error = menu().order("latte").unwrap_err();

        assert_eq!(error.to_string(), "unknown order `latte`");
    }

    #[test]
    fn test_duplicate_base() {
        let json = indoc! {r#"
            {
              "bases": [
                { "name": "espresso", "cost": 10, "label": "Espresso" },
                { "name": "espresso", "cost": 12, "label": "Double Espresso" }
              ]
            }
        "#};

        let error = Menu::try_from(MenuConfig::from_json_str(json).unwrap()).unwrap_err();

        assert!(matches!(error, MenuError::DuplicateBase(name) if name == "espresso"));
    }

    #[test]
    fn test_duplicate_topping() {
        let json = indoc! {r#"
            {
              "bases": [{ "name": "espresso", "cost": 10, "label": "Espresso" }],
              "toppings": [
                { "name": "milk", "delta": 5, "suffix": ", Milk" },
                { "name": "milk", "delta": 6, "suffix": ", Oat Milk" }
              ]
            }
        "#};

        let error = Menu::try_from(MenuConfig::from_json_str(json).unwrap()).unwrap_err();

        assert!(matches!(error, MenuError::DuplicateTopping(name) if name == "milk"));
    }

    #[test]
    fn test_duplicate_order() {
        let json = indoc! {r#"
            {
              "bases": [{ "name": "espresso", "cost": 10, "label": "Espresso" }],
              "toppings": [{ "name": "milk", "delta": 5, "suffix": ", Milk" }],
              "orders": [
                { "name": "latte", "base": "espresso", "toppings": ["milk"] },
                { "name": "latte", "base": "espresso" }
              ]
            }
        "#};

        let error = Menu::try_from(MenuConfig::from_json_str(json).unwrap()).unwrap_err();

        assert!(matches!(&error, MenuError::DuplicateOrder(name) if name == "latte"));
        assert_eq!(error.to_string(), "order `latte` is declared more than once");
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let json = r#"{ "bases": [], "drinks": [] }"#;

        assert!(matches!(MenuConfig::from_json_str(json), Err(MenuError::Parse { .. })));
    }

    #[test]
    fn test_builtin_menu() {
        let menu = Menu::builtin().unwrap();

        for name in menu.order_names() {
            let chain = menu.order(name).unwrap();
            assert_eq!(chain.stages().last().unwrap(), &Snapshot::of(&chain));
        }

        let capuccino = menu.order("capuccino_with_chocolate").unwrap();
        assert_eq!(capuccino.cost(), 32.0);
        assert_eq!(capuccino.label(), "Espresso, Milk, Whip, Chocolate");
    }

    #[test]
    fn test_missing_file() {
        let error = MenuConfig::from_path("/definitely/not/here/menu.json").unwrap_err();

        assert!(matches!(error, MenuError::Io { .. }));
    }
}
