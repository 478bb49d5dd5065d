//! Facade, Observer, Singleton and Strategy, the companions of [`micro_decorator`].
//!
//! Each pattern is small and self-contained; the demonstration pages under `examples/`
//! build a few of these types and report what they do:
//!
//! ```text
//! cargo run -p micro-patterns --example decorator [menu.json]
//! cargo run -p micro-patterns --example facade
//! cargo run -p micro-patterns --example observer
//! cargo run -p micro-patterns --example singleton
//! cargo run -p micro-patterns --example strategy
//! ```

pub mod facade;
pub mod observer;
pub mod singleton;
pub mod strategy;

pub use micro_decorator as decorator;

use tracing::Level;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::FmtSubscriber;

/// Installs the console subscriber used by the demonstration pages.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)
}
