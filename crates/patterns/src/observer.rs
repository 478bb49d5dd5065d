//! Observer: a subject pushing every change of its value to a list of observers.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Observer: Send + Sync {
    /// Identity used by [`Observable::remove`].
    fn id(&self) -> String;

    fn update(&self, value: Option<i64>);
}

pub trait Observable {
    fn add(&mut self, observer: Arc<dyn Observer>);

    /// Removes the first observer with the same id; unknown observers are ignored.
    fn remove(&mut self, observer: &dyn Observer);

    fn notify_observers(&self);
}

/// A subject that notifies its observers every time its value is set.
#[derive(Default)]
pub struct NewsResource {
    value: Option<i64>,
    observers: Vec<Arc<dyn Observer>>,
}

impl NewsResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn set_value(&mut self, value: Option<i64>) {
        self.value = value;
        self.notify_observers();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for NewsResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = self.observers.iter().map(|observer| observer.id()).collect::<Vec<_>>();
        f.debug_struct("NewsResource").field("value", &self.value).field("observers", &ids).finish()
    }
}

impl Observable for NewsResource {
    fn add(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
    }

    fn remove(&mut self, observer: &dyn Observer) {
        let id = observer.id();
        if let Some(index) = self.observers.iter().position(|o| o.id() == id) {
            self.observers.remove(index);
        } else {
            debug!(%id, "observer not registered");
        }
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.update(self.value);
        }
    }
}

macro_rules! news_observer {
    ($name:ident, $id:literal, $byline:literal) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl $name {
            /// What this observer says about `value`; `None` values are ignored.
            pub fn headline(&self, value: Option<i64>) -> Option<String> {
                value.map(|value| format!(concat!($byline, " updated value {}"), value))
            }
        }

        impl Observer for $name {
            fn id(&self) -> String {
                String::from($id)
            }

            fn update(&self, value: Option<i64>) {
                if let Some(headline) = self.headline(value) {
                    info!(observer = $id, "{headline}");
                }
            }
        }
    };
}

news_observer!(NewsAgency, "newsAgency", "New Agency handles");
news_observer!(Reporter, "reporter", "Reporter says");
news_observer!(Blogger, "blogger", "Blogger writes");
