//! Integration tests for `MemoryStore`.

use chrono::NaiveDate;
use rota_core::{
  shift::{Shift, ShiftCategory},
  signup::NewSignup,
  store::RosterStore,
  volunteer::Volunteer,
};
use uuid::Uuid;

use crate::{Error, MemoryStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn volunteer(name: &str) -> Volunteer {
  Volunteer::new(Uuid::new_v4(), name, "+1234567890", "test@example.com").unwrap()
}

fn early_shift(d: NaiveDate) -> Shift {
  Shift::new(Uuid::new_v4(), d, ShiftCategory::EarlyMorning, 1, "06:00", "08:00").unwrap()
}

fn general_shift(d: NaiveDate) -> Shift {
  Shift::new(Uuid::new_v4(), d, ShiftCategory::General, 4, "08:00", "17:00").unwrap()
}

// ─── Volunteers ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_volunteer() {
  let s = MemoryStore::new();

  let alice = s.add_volunteer(volunteer("Alice Johnson")).await.unwrap();
  let fetched = s.get_volunteer(alice.id).await.unwrap();
  assert!(fetched.is_some());
  assert_eq!(fetched.unwrap().name, "Alice Johnson");
}

#[tokio::test]
async fn get_volunteer_missing_returns_none() {
  let s = MemoryStore::new();
  let result = s.get_volunteer(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn add_volunteer_with_taken_id_errors() {
  let s = MemoryStore::new();
  let alice = s.add_volunteer(volunteer("Alice")).await.unwrap();

  let mut dupe = volunteer("Impostor");
  dupe.id = alice.id;
  let err = s.add_volunteer(dupe).await.unwrap_err();
  assert!(matches!(err, Error::VolunteerExists(id) if id == alice.id));
}

#[tokio::test]
async fn list_volunteers_returns_all() {
  let s = MemoryStore::new();
  s.add_volunteer(volunteer("Alice")).await.unwrap();
  s.add_volunteer(volunteer("Bob")).await.unwrap();

  let all = s.list_volunteers().await.unwrap();
  assert_eq!(all.len(), 2);
}

// ─── Shifts ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_shift() {
  let s = MemoryStore::new();
  let shift = s.add_shift(early_shift(date(2026, 1, 5))).await.unwrap();

  let fetched = s.get_shift(shift.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, shift.id);
  assert_eq!(fetched.category, ShiftCategory::EarlyMorning);
}

#[tokio::test]
async fn shifts_in_month_filters_by_calendar_month() {
  let s = MemoryStore::new();
  s.add_shift(early_shift(date(2025, 12, 30))).await.unwrap();
  s.add_shift(general_shift(date(2026, 1, 10))).await.unwrap();
  s.add_shift(general_shift(date(2026, 1, 22))).await.unwrap();
  s.add_shift(general_shift(date(2026, 2, 2))).await.unwrap();

  let january = s.shifts_in_month(2026, 1).await.unwrap();
  assert_eq!(january.len(), 2);
  assert!(january.iter().all(|shift| shift.month_year() == (2026, 1)));
}

// ─── Signups ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_signup_assigns_id_and_timestamp() {
  let s = MemoryStore::new();
  let alice = s.add_volunteer(volunteer("Alice")).await.unwrap();
  let shift = s.add_shift(general_shift(date(2026, 1, 10))).await.unwrap();

  let before = chrono::Utc::now();
  let signup = s
    .add_signup(NewSignup {
      volunteer_id: alice.id,
      shift_id:     shift.id,
      is_emergency: false,
    })
    .await
    .unwrap();

  assert_eq!(signup.volunteer_id(), alice.id);
  assert_eq!(signup.shift_id(), shift.id);
  assert!(signup.is_normal());
  assert!(signup.signed_up_at >= before);

  let all = s.list_signups().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, signup.id);
}

#[tokio::test]
async fn add_signup_unknown_volunteer_errors() {
  let s = MemoryStore::new();
  let shift = s.add_shift(general_shift(date(2026, 1, 10))).await.unwrap();

  let missing = Uuid::new_v4();
  let err = s
    .add_signup(NewSignup {
      volunteer_id: missing,
      shift_id:     shift.id,
      is_emergency: false,
    })
    .await
    .unwrap_err();
  assert!(matches!(err, Error::VolunteerNotFound(id) if id == missing));
}

#[tokio::test]
async fn add_signup_unknown_shift_errors() {
  let s = MemoryStore::new();
  let alice = s.add_volunteer(volunteer("Alice")).await.unwrap();

  let missing = Uuid::new_v4();
  let err = s
    .add_signup(NewSignup {
      volunteer_id: alice.id,
      shift_id:     missing,
      is_emergency: false,
    })
    .await
    .unwrap_err();
  assert!(matches!(err, Error::ShiftNotFound(id) if id == missing));
}

#[tokio::test]
async fn duplicate_signup_errors() {
  let s = MemoryStore::new();
  let alice = s.add_volunteer(volunteer("Alice")).await.unwrap();
  let shift = s.add_shift(general_shift(date(2026, 1, 10))).await.unwrap();

  let input = NewSignup {
    volunteer_id: alice.id,
    shift_id:     shift.id,
    is_emergency: false,
  };
  s.add_signup(input.clone()).await.unwrap();

  let err = s.add_signup(input).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateSignup { .. }));

  // The failed attempt must not have been recorded.
  let all = s.list_signups().await.unwrap();
  assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn signups_filtered_by_volunteer_and_shift() {
  let s = MemoryStore::new();
  let alice = s.add_volunteer(volunteer("Alice")).await.unwrap();
  let bob = s.add_volunteer(volunteer("Bob")).await.unwrap();
  let shift_a = s.add_shift(general_shift(date(2026, 1, 10))).await.unwrap();
  let shift_b = s.add_shift(general_shift(date(2026, 1, 15))).await.unwrap();

  for (v, sh) in [(&alice, &shift_a), (&alice, &shift_b), (&bob, &shift_a)] {
    s.add_signup(NewSignup {
      volunteer_id: v.id,
      shift_id:     sh.id,
      is_emergency: false,
    })
    .await
    .unwrap();
  }

  let alices = s.signups_for_volunteer(alice.id).await.unwrap();
  assert_eq!(alices.len(), 2);
  assert!(alices.iter().all(|su| su.volunteer_id() == alice.id));

  let on_a = s.signups_for_shift(shift_a.id).await.unwrap();
  assert_eq!(on_a.len(), 2);
  assert!(on_a.iter().all(|su| su.shift_id() == shift_a.id));
}

#[tokio::test]
async fn emergency_flag_round_trips() {
  let s = MemoryStore::new();
  let alice = s.add_volunteer(volunteer("Alice")).await.unwrap();
  let shift = s.add_shift(early_shift(date(2026, 1, 5))).await.unwrap();

  let signup = s
    .add_signup(NewSignup {
      volunteer_id: alice.id,
      shift_id:     shift.id,
      is_emergency: true,
    })
    .await
    .unwrap();
  assert!(signup.is_emergency);
  assert!(!signup.is_normal());
}
