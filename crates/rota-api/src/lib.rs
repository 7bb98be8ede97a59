//! JSON REST API for Rota.
//!
//! Exposes an axum [`Router`] backed by any [`rota_core::store::RosterStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rota_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod shifts;
pub mod signups;
pub mod volunteers;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use chrono::Datelike;
use rota_core::store::RosterStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RosterStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Shifts
    .route("/shifts", get(shifts::list::<S>).post(shifts::create::<S>))
    // Volunteers
    .route(
      "/volunteers",
      get(volunteers::list::<S>).post(volunteers::create::<S>),
    )
    .route("/volunteers/{id}", get(volunteers::get_one::<S>))
    .route("/volunteers/{id}/quota", get(volunteers::quota::<S>))
    .route("/volunteers/{id}/signups", get(volunteers::signups::<S>))
    // Signups
    .route("/signups", post(signups::create::<S>))
    .with_state(store)
}

/// Resolve optional month/year query params, defaulting to the current UTC
/// month. Month is 1–12.
pub(crate) fn month_defaults(month: Option<u32>, year: Option<i32>) -> (i32, u32) {
  let now = chrono::Utc::now();
  (
    year.unwrap_or_else(|| now.year()),
    month.unwrap_or_else(|| now.month()),
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────
