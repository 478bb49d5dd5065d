//! Type-erased chains built at runtime.
//!
//! Statically nested items (`Decorated<Decorated<BaseItem>>`) are the cheapest way to build a
//! chain whose shape is known at compile time. When the toppings come from data, such as a
//! menu file, [`ChainBuilder`] boxes each stage instead and records a [`Snapshot`] after the
//! base and after every wrap.

use crate::decorator::Decorator;
use crate::decorated::Topping;
use crate::item::{Item, Snapshot};
use std::fmt;
use thiserror::Error;
use tracing::debug;

type BoxedItem = Box<dyn Item + Send + Sync>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainBuildError {
    #[error("base item must be set")]
    MissingBase,

    #[error("cost of stage `{stage}` is not finite: {cost}")]
    NonFiniteCost { stage: String, cost: f64 },
}

/// A base item wrapped by zero or more toppings, fixed at construction.
pub struct Chain {
    item: BoxedItem,
    stages: Vec<Snapshot>,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// One snapshot per construction stage; the first is the bare base item.
    pub fn stages(&self) -> &[Snapshot] {
        &self.stages
    }

    /// Number of toppings wrapped around the base.
    pub fn depth(&self) -> usize {
        self.stages.len() - 1
    }

    /// The stages as a JSON array of `{"cost", "label"}` objects.
    pub fn transcript_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.stages)
    }
}

impl Item for Chain {
    #[inline]
    fn cost(&self) -> f64 {
        self.item.cost()
    }

    #[inline]
    fn write_label(&self, buf: &mut String) {
        self.item.write_label(buf);
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("stages", &self.stages).finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct ChainBuilder {
    base: Option<BoxedItem>,
    toppings: Vec<Topping>,
}

impl ChainBuilder {
    fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, item: impl Item + Send + Sync + 'static) -> Self {
        self.base = Some(Box::new(item));
        self
    }

    /// Appends a topping; toppings wrap in the order they are added.
    pub fn topping(mut self, topping: Topping) -> Self {
        self.toppings.push(topping);
        self
    }

    pub fn toppings<T: IntoIterator<Item = Topping>>(mut self, toppings: T) -> Self {
        self.toppings.extend(toppings);
        self
    }

    pub fn build(self) -> Result<Chain, ChainBuildError> {
        let mut item = self.base.ok_or(ChainBuildError::MissingBase)?;
        let mut stages = Vec::with_capacity(self.toppings.len() + 1);
        stages.push(checked_snapshot(&item)?);

        for topping in &self.toppings {
            item = Box::new(topping.decorate(item));
            stages.push(checked_snapshot(&item)?);
        }

        debug!(depth = self.toppings.len(), cost = item.cost(), "chain built");
        Ok(Chain { item, stages })
    }
}

impl fmt::Debug for ChainBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("base", &self.base.as_ref().map(|base| base.label()))
            .field("toppings", &self.toppings)
            .finish()
    }
}

fn checked_snapshot(item: &BoxedItem) -> Result<Snapshot, ChainBuildError> {
    let snapshot = Snapshot::of(item);
    if snapshot.cost.is_finite() {
        Ok(snapshot)
    } else {
        Err(ChainBuildError::NonFiniteCost { stage: snapshot.label, cost: snapshot.cost })
    }
}
