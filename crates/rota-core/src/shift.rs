//! Shift — a schedulable slot with a date, category, time bounds, and
//! capacity.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// The kind of shift. The two categories carry different fairness rules:
/// early-morning slots are scarce and filled often, general slots have more
/// capacity but are exclusive per volunteer per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
  EarlyMorning,
  General,
}

/// A schedulable slot on a single calendar day.
///
/// The date carries no time-of-day component; `start_time` and `end_time`
/// are opaque display strings and play no part in identity or rule
/// evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
  pub id:           Uuid,
  pub date:         NaiveDate,
  pub category:     ShiftCategory,
  pub max_capacity: u32,
  pub start_time:   String,
  pub end_time:     String,
}

impl Shift {
  /// Build a shift. Capacity must be at least one.
  pub fn new(
    id: Uuid,
    date: NaiveDate,
    category: ShiftCategory,
    max_capacity: u32,
    start_time: impl Into<String>,
    end_time: impl Into<String>,
  ) -> Result<Self> {
    if max_capacity == 0 {
      return Err(Error::NonPositiveCapacity);
    }
    Ok(Self {
      id,
      date,
      category,
      max_capacity,
      start_time: start_time.into(),
      end_time: end_time.into(),
    })
  }

  /// The `(year, month)` bucket this shift falls in. Month is 1–12.
  pub fn month_year(&self) -> (i32, u32) {
    (self.date.year(), self.date.month())
  }

  /// Day of week under the Sunday = 0 … Saturday = 6 convention.
  pub fn weekday_index(&self) -> u32 {
    self.date.weekday().num_days_from_sunday()
  }

  pub fn is_thursday(&self) -> bool {
    self.date.weekday() == Weekday::Thu
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn shift(d: NaiveDate) -> Shift {
    Shift::new(Uuid::new_v4(), d, ShiftCategory::General, 4, "08:00", "17:00").unwrap()
  }

  #[test]
  fn rejects_zero_capacity() {
    let err = Shift::new(
      Uuid::new_v4(),
      date(2026, 1, 15),
      ShiftCategory::EarlyMorning,
      0,
      "06:00",
      "08:00",
    )
    .unwrap_err();
    assert_eq!(err, Error::NonPositiveCapacity);
  }

  #[test]
  fn month_year_is_calendar_year_and_month() {
    assert_eq!(shift(date(2026, 1, 15)).month_year(), (2026, 1));
    assert_eq!(shift(date(2025, 12, 31)).month_year(), (2025, 12));
  }

  #[test]
  fn weekday_index_uses_sunday_zero_convention() {
    // 2026-01-04 is a Sunday, 2026-01-15 a Thursday, 2026-01-10 a Saturday.
    assert_eq!(shift(date(2026, 1, 4)).weekday_index(), 0);
    assert_eq!(shift(date(2026, 1, 15)).weekday_index(), 4);
    assert_eq!(shift(date(2026, 1, 10)).weekday_index(), 6);
  }

  #[test]
  fn is_thursday_matches_weekday_index() {
    assert!(shift(date(2026, 1, 15)).is_thursday());
    assert!(!shift(date(2026, 1, 16)).is_thursday());
  }
}
