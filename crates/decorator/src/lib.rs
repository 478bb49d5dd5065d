//! Decorated item chains.
//!
//! A chain is one base item nested inside zero or more decorators. Every decorator owns
//! exactly one inner item and adds a fixed cost delta and a fixed label suffix to what the
//! inner item reports, so a chain's cost is the sum of all contributions and its label is
//! the base label followed by every suffix in wrap order.
//!
//! # Example
//!
//! ```
//! use micro_decorator::{Item, ItemExt};
//! use micro_decorator::menu::{espresso, milk, whip};
//!
//! let capuccino = espresso().with(milk()).with(whip());
//!
//! assert_eq!(capuccino.cost(), 22.0);
//! assert_eq!(capuccino.label(), "Espresso, Milk, Whip");
//! ```
//!
//! # Architecture
//!
//! - [`item`]: the [`Item`] capability, [`BaseItem`] and [`Snapshot`]
//! - [`decorated`]: [`Decorated`] and its contribution, [`Topping`]
//! - [`decorator`]: a generic [`Decorator`](decorator::Decorator) toolkit to describe recipes
//! - [`chain`]: type-erased chains built at runtime, with a per-stage transcript
//! - [`config`]: JSON menus describing bases, toppings and orders
//! - [`menu`]: the items used by the demonstration pages
//!
//! Chains are immutable once built. Reads recompute from the fixed structure and never
//! mutate, so a chain can be shared between threads as is.

pub mod chain;
pub mod config;
pub mod decorated;
pub mod decorator;
pub mod item;
pub mod menu;

pub use chain::{Chain, ChainBuildError, ChainBuilder};
pub use config::{Menu, MenuConfig, MenuError};
pub use decorated::{Decorated, Topping};
pub use item::{BaseItem, Item, ItemExt, Snapshot};
