//! Core types and scheduling rules for the Rota volunteer roster.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod quota;
pub mod rules;
pub mod shift;
pub mod signup;
pub mod store;
pub mod volunteer;

pub use error::{Error, Result};
