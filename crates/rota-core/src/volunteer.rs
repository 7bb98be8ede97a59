//! Volunteer — a person eligible to hold shift signups.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// A registered volunteer. Immutable once constructed; corrections are made
/// upstream by replacing the record, never by mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
  pub id:    Uuid,
  pub name:  String,
  pub phone: String,
  /// Informational only; never validated or matched against.
  pub email: String,
}

impl Volunteer {
  /// Build a volunteer. Name and phone must contain at least one
  /// non-whitespace character.
  pub fn new(
    id: Uuid,
    name: impl Into<String>,
    phone: impl Into<String>,
    email: impl Into<String>,
  ) -> Result<Self> {
    let name = name.into();
    let phone = phone.into();
    if name.trim().is_empty() {
      return Err(Error::EmptyName);
    }
    if phone.trim().is_empty() {
      return Err(Error::EmptyPhone);
    }
    Ok(Self {
      id,
      name,
      phone,
      email: email.into(),
    })
  }
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;

  #[test]
  fn constructs_with_valid_fields() {
    let v =
      Volunteer::new(Uuid::new_v4(), "Alice Johnson", "+1234567890", "alice@example.com").unwrap();
    assert_eq!(v.name, "Alice Johnson");
    assert_eq!(v.phone, "+1234567890");
  }

  #[test]
  fn rejects_empty_name() {
    let err = Volunteer::new(Uuid::new_v4(), "", "+1234567890", "").unwrap_err();
    assert_eq!(err, Error::EmptyName);
  }

  #[test]
  fn rejects_whitespace_name() {
    let err = Volunteer::new(Uuid::new_v4(), "   ", "+1234567890", "").unwrap_err();
    assert_eq!(err, Error::EmptyName);
  }

  #[test]
  fn rejects_empty_phone() {
    let err = Volunteer::new(Uuid::new_v4(), "Alice", " ", "").unwrap_err();
    assert_eq!(err, Error::EmptyPhone);
  }

  #[test]
  fn email_is_not_validated() {
    let v = Volunteer::new(Uuid::new_v4(), "Alice", "+1234567890", "").unwrap();
    assert!(v.email.is_empty());
  }
}
