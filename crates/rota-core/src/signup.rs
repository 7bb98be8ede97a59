//! Signup — a committed binding of one volunteer to one shift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{shift::Shift, volunteer::Volunteer};

/// A committed reservation. Immutable once created; the surrounding system
/// only ever creates or queries signups. A signup owns both entities by
/// value, so it cannot exist without a volunteer and a shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signup {
  pub id:           Uuid,
  pub volunteer:    Volunteer,
  pub shift:        Shift,
  /// Store-assigned timestamp; never changes after creation.
  pub signed_up_at: DateTime<Utc>,
  pub is_emergency: bool,
}

impl Signup {
  pub fn volunteer_id(&self) -> Uuid {
    self.volunteer.id
  }

  pub fn shift_id(&self) -> Uuid {
    self.shift.id
  }

  /// A signup made in the normal window, as opposed to an emergency pickup.
  pub fn is_normal(&self) -> bool {
    !self.is_emergency
  }
}

/// Input to [`crate::store::RosterStore::add_signup`].
/// `id` and `signed_up_at` are always set by the store; they are not
/// accepted from callers.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSignup {
  pub volunteer_id: Uuid,
  pub shift_id:     Uuid,
  #[serde(default)]
  pub is_emergency: bool,
}
