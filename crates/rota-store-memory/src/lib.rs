//! In-memory backend for the Rota roster store.
//!
//! Keeps every record in process memory behind a `tokio::sync::RwLock`, so
//! the trait's `Send`-future contract holds without blocking the runtime.
//! There is no durability; a restart starts from an empty roster.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
