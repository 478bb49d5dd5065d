use crate::decorator::Decorator;

/// A recipe of two decorators: `first` wraps the raw value, `then` wraps that.
///
/// Built by [`DecoratorExt::and_then`](crate::decorator::DecoratorExt::and_then) and
/// [`DecoratorExt::compose`](crate::decorator::DecoratorExt::compose). Composers nest, so a
/// recipe of any length is a right-leaning tree of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecoratorComposer<D1, D2> {
    first: D1,
    then: D2,
}

impl<D1, D2> DecoratorComposer<D1, D2> {
    pub fn new(first: D1, then: D2) -> Self {
        Self { first, then }
    }

    pub fn first(&self) -> &D1 {
        &self.first
    }

    pub fn then(&self) -> &D2 {
        &self.then
    }
}

impl<In, D1, D2> Decorator<In> for DecoratorComposer<D1, D2>
where
    D1: Decorator<In>,
    D2: Decorator<D1::Out>,
{
    type Out = D2::Out;

    fn decorate(&self, raw: In) -> Self::Out {
        self.then.decorate(self.first.decorate(raw))
    }
}
