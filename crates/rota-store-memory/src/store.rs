//! [`MemoryStore`] — the in-memory implementation of [`RosterStore`].

use std::{collections::HashMap, sync::Arc};

use chrono::{Datelike, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use rota_core::{
  shift::Shift,
  signup::{NewSignup, Signup},
  store::RosterStore,
  volunteer::Volunteer,
};

use crate::{Error, Result};

#[derive(Debug, Default)]
struct Inner {
  volunteers: HashMap<Uuid, Volunteer>,
  shifts:     HashMap<Uuid, Shift>,
  signups:    HashMap<Uuid, Signup>,
}

/// A roster store held entirely in process memory.
///
/// Cloning is cheap — every clone shares the same underlying maps.
#[derive(Clone, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl RosterStore for MemoryStore {
  type Error = Error;

  // ── Volunteers ────────────────────────────────────────────────────────────

  async fn add_volunteer(&self, volunteer: Volunteer) -> Result<Volunteer> {
    let mut inner = self.inner.write().await;
    if inner.volunteers.contains_key(&volunteer.id) {
      return Err(Error::VolunteerExists(volunteer.id));
    }
    inner.volunteers.insert(volunteer.id, volunteer.clone());
    Ok(volunteer)
  }

  async fn get_volunteer(&self, id: Uuid) -> Result<Option<Volunteer>> {
    Ok(self.inner.read().await.volunteers.get(&id).cloned())
  }

  async fn list_volunteers(&self) -> Result<Vec<Volunteer>> {
    Ok(self.inner.read().await.volunteers.values().cloned().collect())
  }

  // ── Shifts ────────────────────────────────────────────────────────────────

  async fn add_shift(&self, shift: Shift) -> Result<Shift> {
    let mut inner = self.inner.write().await;
    if inner.shifts.contains_key(&shift.id) {
      return Err(Error::ShiftExists(shift.id));
    }
    inner.shifts.insert(shift.id, shift.clone());
    Ok(shift)
  }

  async fn get_shift(&self, id: Uuid) -> Result<Option<Shift>> {
    Ok(self.inner.read().await.shifts.get(&id).cloned())
  }

  async fn list_shifts(&self) -> Result<Vec<Shift>> {
    Ok(self.inner.read().await.shifts.values().cloned().collect())
  }

  async fn shifts_in_month(&self, year: i32, month: u32) -> Result<Vec<Shift>> {
    Ok(
      self
        .inner
        .read()
        .await
        .shifts
        .values()
        .filter(|s| s.date.year() == year && s.date.month() == month)
        .cloned()
        .collect(),
    )
  }

  // ── Signups ───────────────────────────────────────────────────────────────

  async fn add_signup(&self, input: NewSignup) -> Result<Signup> {
    // A single write lock covers lookup, duplicate check, and insert, so
    // two concurrent requests cannot both pass the duplicate check.
    let mut inner = self.inner.write().await;

    let volunteer = inner
      .volunteers
      .get(&input.volunteer_id)
      .cloned()
      .ok_or(Error::VolunteerNotFound(input.volunteer_id))?;
    let shift = inner
      .shifts
      .get(&input.shift_id)
      .cloned()
      .ok_or(Error::ShiftNotFound(input.shift_id))?;

    let duplicate = inner
      .signups
      .values()
      .any(|s| s.volunteer_id() == input.volunteer_id && s.shift_id() == input.shift_id);
    if duplicate {
      return Err(Error::DuplicateSignup {
        volunteer_id: input.volunteer_id,
        shift_id:     input.shift_id,
      });
    }

    let signup = Signup {
      id: Uuid::new_v4(),
      volunteer,
      shift,
      signed_up_at: Utc::now(),
      is_emergency: input.is_emergency,
    };
    inner.signups.insert(signup.id, signup.clone());
    Ok(signup)
  }

  async fn list_signups(&self) -> Result<Vec<Signup>> {
    Ok(self.inner.read().await.signups.values().cloned().collect())
  }

  async fn signups_for_volunteer(&self, volunteer_id: Uuid) -> Result<Vec<Signup>> {
    Ok(
      self
        .inner
        .read()
        .await
        .signups
        .values()
        .filter(|s| s.volunteer_id() == volunteer_id)
        .cloned()
        .collect(),
    )
  }

  async fn signups_for_shift(&self, shift_id: Uuid) -> Result<Vec<Signup>> {
    Ok(
      self
        .inner
        .read()
        .await
        .signups
        .values()
        .filter(|s| s.shift_id() == shift_id)
        .cloned()
        .collect(),
    )
  }
}
