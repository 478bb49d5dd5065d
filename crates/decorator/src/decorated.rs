//! Decorated items.
//!
//! A [`Decorated`] owns exactly one inner item and adds a [`Topping`] on top of it: a fixed
//! cost delta and a fixed label suffix. The inner item is a required constructor argument,
//! so a decorator without a target cannot be built.
//!
//! For a chain `base -> d1 -> ... -> dn`:
//! - `cost = base.cost + d1.delta + ... + dn.delta`
//! - `label = base.label + d1.suffix + ... + dn.suffix`

use crate::decorator::{Decorator, DecoratorExt};
use crate::item::Item;
use std::borrow::Cow;
use tracing::trace;

/// The contribution of one decorator.
#[derive(Debug, Clone, PartialEq)]
pub struct Topping {
    delta: f64,
    suffix: Cow<'static, str>,
}

impl Topping {
    pub fn new(delta: f64, suffix: impl Into<Cow<'static, str>>) -> Self {
        Self { delta, suffix: suffix.into() }
    }

    pub const fn from_static(delta: f64, suffix: &'static str) -> Self {
        Self { delta, suffix: Cow::Borrowed(suffix) }
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl<I: Item> Decorator<I> for Topping {
    type Out = Decorated<I>;

    fn decorate(&self, raw: I) -> Self::Out {
        trace!(delta = self.delta, suffix = %self.suffix, "wrapping item");
        Decorated::new(raw, self.clone())
    }
}

impl DecoratorExt for Topping {}

/// An item wrapped by one [`Topping`].
#[derive(Debug, Clone, PartialEq)]
pub struct Decorated<I> {
    inner: I,
    topping: Topping,
}

impl<I: Item> Decorated<I> {
    pub fn new(inner: I, topping: Topping) -> Self {
        Self { inner, topping }
    }
}

impl<I> Decorated<I> {
    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn topping(&self) -> &Topping {
        &self.topping
    }
}

impl<I: Item> Item for Decorated<I> {
    #[inline]
    fn cost(&self) -> f64 {
        self.inner.cost() + self.topping.delta
    }

    fn write_label(&self, buf: &mut String) {
        self.inner.write_label(buf);
        buf.push_str(&self.topping.suffix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{BaseItem, ItemExt, Snapshot};
    use crate::menu::{chocolate, espresso, ice_cream, milk, vanila, whip};
    use proptest::prelude::*;

    #[test]
    fn test_milk_then_whip() {
        let item = espresso().with(milk()).with(whip());

        assert_eq!(item.cost(), 22.0);
        assert_eq!(item.label(), "Espresso, Milk, Whip");
    }

    #[test]
    fn test_whip_then_milk() {
        let item = espresso().with(whip()).with(milk());

        assert_eq!(item.cost(), 22.0);
        assert_eq!(item.label(), "Espresso, Whip, Milk");
    }

    #[test]
    fn test_order_changes_label_not_cost() {
        let milk_whip = espresso().with(milk()).with(whip());
        let whip_milk = espresso().with(whip()).with(milk());

        assert_eq!(milk_whip.cost(), whip_milk.cost());
        assert_ne!(milk_whip.label(), whip_milk.label());
    }

    #[test]
    fn test_independent_decorations_share_base() {
        let base = ice_cream();

        let with_chocolate = (&base).with(chocolate());
        let with_vanila = (&base).with(vanila());

        assert_eq!(with_chocolate.cost(), 30.0);
        assert_eq!(with_vanila.cost(), 30.0);
        assert_eq!(with_chocolate.label(), "Ice Cream, Chocolate");
        assert_eq!(with_vanila.label(), "Ice Cream, Vanila");
        assert_eq!(base, ice_cream());
    }

    #[test]
    fn test_reads_are_idempotent() {
        let item = espresso().with(milk()).with(whip()).with(chocolate());

        let first = Snapshot::of(&item);
        let second = Snapshot::of(&item);

        assert_eq!(first, second);
        assert_eq!(first.cost, 32.0);
    }

    #[test]
    fn test_accessors() {
        let item = espresso().with(milk()).with(whip());

        assert_eq!(item.topping(), &whip());
        assert_eq!(item.inner().topping(), &milk());
        assert_eq!(item.inner().inner(), &espresso());
    }

    #[test]
    fn test_shared_across_threads() {
        let item = std::sync::Arc::new(espresso().with(milk()).with(whip()));

        let handles = (0..4)
            .map(|_| {
                let item = std::sync::Arc::clone(&item);
                std::thread::spawn(move || Snapshot::of(&item))
            })
            .collect::<Vec<_>>();

        for handle in handles {
            let snapshot = handle.join().unwrap();
            assert_eq!(snapshot.cost, 22.0);
            assert_eq!(snapshot.label, "Espresso, Milk, Whip");
        }
    }

    fn toppings() -> impl Strategy<Value = Vec<(u16, String)>> {
        prop::collection::vec((any::<u16>(), "[a-z ,]{0,8}"), 0..12)
    }

    proptest! {
        #[test]
        fn test_chain_accumulates_in_wrap_order(base_cost in any::<u16>(), base_label in "[A-Za-z ]{0,12}", toppings in toppings()) {
            let mut item: Box<dyn Item> = Box::new(BaseItem::new(f64::from(base_cost), base_label.clone()));
            let mut expected_cost = f64::from(base_cost);
            let mut expected_label = base_label;

            for (delta, suffix) in toppings {
                expected_cost += f64::from(delta);
                expected_label.push_str(&suffix);
                item = Box::new(Topping::new(f64::from(delta), suffix).decorate(item));
            }

            prop_assert_eq!(item.cost(), expected_cost);
            prop_assert_eq!(item.label(), expected_label);
        }

        #[test]
        fn test_reversed_order_keeps_cost(toppings in toppings()) {
            let forward = toppings
                .iter()
                .fold(Box::new(espresso()) as Box<dyn Item>, |item, (delta, suffix)| -> Box<dyn Item> {
                    Box::new(Topping::new(f64::from(*delta), suffix.clone()).decorate(item))
                });
            let backward = toppings
                .iter()
                .rev()
                .fold(Box::new(espresso()) as Box<dyn Item>, |item, (delta, suffix)| -> Box<dyn Item> {
                    Box::new(Topping::new(f64::from(*delta), suffix.clone()).decorate(item))
                });

            prop_assert_eq!(forward.cost(), backward.cost());
        }
    }
}
