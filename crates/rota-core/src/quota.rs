//! Monthly quota read-model.
//!
//! Never stored — always derived from the signup set, counting the same way
//! the rules engine does.

use serde::Serialize;

use crate::{rules::RulePolicy, shift::ShiftCategory, signup::Signup, volunteer::Volunteer};

/// Usage of one capped bucket within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaBucket {
  pub current:   usize,
  pub max:       usize,
  pub remaining: usize,
}

impl QuotaBucket {
  fn new(current: usize, max: usize) -> Self {
    Self {
      current,
      max,
      remaining: max.saturating_sub(current),
    }
  }
}

/// A volunteer's signup usage for one `(year, month)` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyQuota {
  pub early_morning: QuotaBucket,
  pub general:       QuotaBucket,
  pub total:         QuotaBucket,
}

/// Compute `volunteer`'s usage for `year`/`month` from the full signup set.
///
/// The general bucket has no cap of its own; it shares the monthly total.
pub fn monthly_quota(
  volunteer: &Volunteer,
  year: i32,
  month: u32,
  signups: &[Signup],
  policy: &RulePolicy,
) -> MonthlyQuota {
  let in_month: Vec<&Signup> = signups
    .iter()
    .filter(|s| s.volunteer_id() == volunteer.id && s.shift.month_year() == (year, month))
    .collect();

  let early = in_month
    .iter()
    .filter(|s| s.shift.category == ShiftCategory::EarlyMorning)
    .count();
  let general = in_month
    .iter()
    .filter(|s| s.shift.category == ShiftCategory::General)
    .count();

  MonthlyQuota {
    early_morning: QuotaBucket::new(early, policy.max_early_morning_per_month),
    general:       QuotaBucket::new(general, policy.max_total_per_month),
    total:         QuotaBucket::new(in_month.len(), policy.max_total_per_month),
  }
}
