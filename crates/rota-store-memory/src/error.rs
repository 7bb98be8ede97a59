//! Error types for `rota-store-memory`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("volunteer not found: {0}")]
  VolunteerNotFound(Uuid),

  #[error("shift not found: {0}")]
  ShiftNotFound(Uuid),

  #[error("volunteer id already taken: {0}")]
  VolunteerExists(Uuid),

  #[error("shift id already taken: {0}")]
  ShiftExists(Uuid),

  #[error("volunteer {volunteer_id} is already signed up for shift {shift_id}")]
  DuplicateSignup { volunteer_id: Uuid, shift_id: Uuid },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
