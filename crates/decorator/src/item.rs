//! The [`Item`] capability and its leaf implementation [`BaseItem`].
//!
//! Every item reports a cumulative cost and a cumulative label. Items are immutable once
//! built; both reads recompute from the fixed structure, so they are idempotent and can be
//! shared across threads without synchronization.

use crate::decorator::Decorator;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Something with a price and a description.
pub trait Item {
    /// The cumulative cost of this item.
    fn cost(&self) -> f64;

    /// Appends the cumulative label of this item to `buf`.
    fn write_label(&self, buf: &mut String);

    /// The cumulative label of this item.
    fn label(&self) -> String {
        let mut buf = String::new();
        self.write_label(&mut buf);
        buf
    }
}

/// Fluent wrapping of an item, innermost decorator first.
///
/// ```
/// use micro_decorator::{Item, ItemExt};
/// use micro_decorator::menu::{espresso, milk, whip};
///
/// let item = espresso().with(milk()).with(whip());
/// assert_eq!(item.label(), "Espresso, Milk, Whip");
/// ```
pub trait ItemExt: Item + Sized {
    /// Hands `self` to `decorator` as its inner item. The result wraps `self` by value;
    /// pass `&item` to keep the original usable.
    fn with<D: Decorator<Self>>(self, decorator: D) -> D::Out {
        decorator.decorate(self)
    }
}

impl<T: Item> ItemExt for T {}

/// A leaf item: a fixed cost and a fixed label.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseItem {
    cost: f64,
    label: Cow<'static, str>,
}

impl BaseItem {
    pub fn new(cost: f64, label: impl Into<Cow<'static, str>>) -> Self {
        Self { cost, label: label.into() }
    }

    /// Usable in `const` context for items with a static label.
    pub const fn from_static(cost: f64, label: &'static str) -> Self {
        Self { cost, label: Cow::Borrowed(label) }
    }
}

impl Item for BaseItem {
    #[inline]
    fn cost(&self) -> f64 {
        self.cost
    }

    #[inline]
    fn write_label(&self, buf: &mut String) {
        buf.push_str(&self.label);
    }

    fn label(&self) -> String {
        self.label.clone().into_owned()
    }
}

impl fmt::Display for BaseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.cost)
    }
}

macro_rules! forward_item {
    ($($ptr:ty),*) => {
        $(
            impl<T: Item + ?Sized> Item for $ptr {
                #[inline]
                fn cost(&self) -> f64 {
                    (**self).cost()
                }

                #[inline]
                fn write_label(&self, buf: &mut String) {
                    (**self).write_label(buf)
                }

                fn label(&self) -> String {
                    (**self).label()
                }
            }
        )*
    };
}

forward_item!(&T, Box<T>, Rc<T>, Arc<T>);

/// The `(cost, label)` pair of an item at one moment.
///
/// Serializes as `{"cost": .., "label": ..}`, see [`Chain::transcript_json`](crate::Chain::transcript_json).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub cost: f64,
    pub label: String,
}

impl Snapshot {
    pub fn of<I: Item + ?Sized>(item: &I) -> Self {
        Self { cost: item.cost(), label: item.label() }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.label, self.cost)
    }
}
