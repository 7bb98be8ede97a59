//! The `RosterStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `rota-store-memory`).
//! Higher layers (`rota-api`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  shift::Shift,
  signup::{NewSignup, Signup},
  volunteer::Volunteer,
};

/// Abstraction over a roster storage backend.
///
/// Volunteers and shifts arrive already validated by their constructors;
/// signups are only recorded after the rules engine has approved them.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RosterStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Volunteers ────────────────────────────────────────────────────────

  /// Persist a volunteer. Returns an error if the id is already taken.
  fn add_volunteer(
    &self,
    volunteer: Volunteer,
  ) -> impl Future<Output = Result<Volunteer, Self::Error>> + Send + '_;

  /// Retrieve a volunteer by id. Returns `None` if not found.
  fn get_volunteer(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Volunteer>, Self::Error>> + Send + '_;

  fn list_volunteers(
    &self,
  ) -> impl Future<Output = Result<Vec<Volunteer>, Self::Error>> + Send + '_;

  // ── Shifts ────────────────────────────────────────────────────────────

  /// Persist a shift. Returns an error if the id is already taken.
  fn add_shift(
    &self,
    shift: Shift,
  ) -> impl Future<Output = Result<Shift, Self::Error>> + Send + '_;

  /// Retrieve a shift by id. Returns `None` if not found.
  fn get_shift(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Shift>, Self::Error>> + Send + '_;

  fn list_shifts(&self) -> impl Future<Output = Result<Vec<Shift>, Self::Error>> + Send + '_;

  /// Shifts whose date falls in the given calendar month (1–12).
  fn shifts_in_month(
    &self,
    year: i32,
    month: u32,
  ) -> impl Future<Output = Result<Vec<Shift>, Self::Error>> + Send + '_;

  // ── Signups ───────────────────────────────────────────────────────────

  /// Record an approved signup and return the stored [`Signup`].
  ///
  /// The id and `signed_up_at` timestamp are set by the store. Fails when
  /// either entity is unknown, or when the volunteer already holds a signup
  /// for the same shift (duplicate detection is a storage concern, not a
  /// scheduling rule).
  fn add_signup(
    &self,
    input: NewSignup,
  ) -> impl Future<Output = Result<Signup, Self::Error>> + Send + '_;

  /// The complete signup set — the history the rules engine consumes.
  fn list_signups(&self) -> impl Future<Output = Result<Vec<Signup>, Self::Error>> + Send + '_;

  fn signups_for_volunteer(
    &self,
    volunteer_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Signup>, Self::Error>> + Send + '_;

  fn signups_for_shift(
    &self,
    shift_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Signup>, Self::Error>> + Send + '_;
}
