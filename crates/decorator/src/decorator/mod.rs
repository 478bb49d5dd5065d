//! Generic decorator toolkit.
//!
//! A [`Decorator`] turns one value into another, usually by wrapping it. Decorators
//! compose: `a.and_then(b)` applies `a` first and lets `b` wrap the result, so a whole
//! recipe can be described once and applied to any item later.
//!
//! ```
//! use micro_decorator::decorator::{Decorator, DecoratorExt};
//! use micro_decorator::menu::{espresso, milk, whip};
//! use micro_decorator::Item;
//!
//! let capuccino = milk().and_then(whip());
//! let item = capuccino.decorate(espresso());
//!
//! assert_eq!(item.cost(), 22.0);
//! assert_eq!(item.label(), "Espresso, Milk, Whip");
//! ```

mod decorator_composer;

pub use decorator_composer::DecoratorComposer;

/// Wraps an input value into an output value.
pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

/// Combinators shared by every decorator of this crate.
///
/// Kept apart from [`Decorator`] so that `and_then`/`compose` can be called before the
/// input type is known. Implement it for your own decorator to get the combinators.
pub trait DecoratorExt: Sized {
    /// `self` decorates first, then `decorator` wraps the result.
    fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D> {
        DecoratorComposer::new(self, decorator)
    }

    /// `decorator` decorates first, then `self` wraps the result.
    fn compose<D>(self, decorator: D) -> DecoratorComposer<D, Self> {
        DecoratorComposer::new(decorator, self)
    }
}

impl<D1, D2> DecoratorExt for DecoratorComposer<D1, D2> {}

impl<In, D: Decorator<In> + ?Sized> Decorator<In> for &D {
    type Out = D::Out;

    fn decorate(&self, raw: In) -> Self::Out {
        (**self).decorate(raw)
    }
}
