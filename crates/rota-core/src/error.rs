//! Error types for `rota-core`.

use thiserror::Error;

/// Entity construction failures. These surface when an upstream caller
/// supplies an invalid value; a constructed entity is always valid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("volunteer name must not be empty")]
  EmptyName,

  #[error("volunteer phone number must not be empty")]
  EmptyPhone,

  #[error("shift capacity must be greater than zero")]
  NonPositiveCapacity,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
