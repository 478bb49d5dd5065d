//! Singleton: one process-wide instance, created on first access.
//!
//! The instance lives in a [`Lazy`] static and is initialized exactly once, the first time
//! [`Singleton::shared`] is called. The constructor is private, so every handle is the same
//! `&'static` reference. The value is an atomic, which keeps the instance `Sync` without a lock.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::info;

static SHARED: Lazy<Singleton> = Lazy::new(Singleton::new);

#[derive(Debug)]
pub struct Singleton {
    value: AtomicI64,
}

impl Singleton {
    fn new() -> Self {
        info!("initializing shared instance");
        Self { value: AtomicI64::new(0) }
    }

    /// Returns the process-wide instance.
    pub fn shared() -> &'static Singleton {
        &SHARED
    }

    pub fn value(&self) -> i64 {
        self.value.load(Ordering::Acquire)
    }

    pub fn set_value(&self, value: i64) {
        self.value.store(value, Ordering::Release);
    }

    /// Reports the current value and returns it.
    pub fn change_value(&self) -> i64 {
        let value = self.value();
        info!("value = {value}");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    // keep this the only test touching the shared instance
    #[test]
    fn test_shared_instance() {
        let object = Singleton::shared();
        let second_object = Singleton::shared();
        assert!(ptr::eq(object, second_object));

        object.set_value(1000);
        second_object.set_value(2000);
        assert_eq!(object.change_value(), 2000);
        assert_eq!(second_object.change_value(), 2000);

        object.set_value(200);
        assert_eq!(second_object.change_value(), 200);

        let from_thread = std::thread::spawn(|| Singleton::shared().value()).join().unwrap();
        assert_eq!(from_thread, 200);
    }
}
