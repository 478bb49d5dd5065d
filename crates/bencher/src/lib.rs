use micro_decorator::menu::{chocolate, espresso, milk, vanila, whip};
use micro_decorator::{Chain, Topping};

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    depth: usize,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, depth: usize) -> Self {
        Self { name, group, depth }
    }

    pub fn small(name: &'static str) -> Self {
        Self::new(name, TestGroup::Small, 2)
    }

    pub fn normal(name: &'static str) -> Self {
        Self::new(name, TestGroup::Normal, 16)
    }

    pub fn large(name: &'static str) -> Self {
        Self::new(name, TestGroup::Large, 256)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The toppings of this case, cycling through the menu.
    pub fn toppings(&self) -> Vec<Topping> {
        [milk(), whip(), chocolate(), vanila()].into_iter().cycle().take(self.depth).collect()
    }

    pub fn chain(&self) -> Chain {
        Chain::builder().base(espresso()).toppings(self.toppings()).build().expect("bench chain should be valid")
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}
