//! The scheduling rules engine — decides whether a proposed signup is
//! permitted given a volunteer's existing reservations.
//!
//! Rules run in a fixed priority order and evaluation stops at the first
//! violation, so a denial always carries exactly one reason. Emergency
//! pickups bypass the monthly fairness caps but must still not create a
//! same-day general-shift conflict.

use crate::{
  shift::{Shift, ShiftCategory},
  signup::Signup,
  volunteer::Volunteer,
};

// ─── Decision ────────────────────────────────────────────────────────────────

/// The engine's verdict on a proposed signup.
///
/// A denial is a normal negative result, not a fault; the engine never
/// errors for well-formed inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
  pub allowed: bool,
  /// Violation messages. Empty on success; exactly one entry on denial.
  pub reasons: Vec<String>,
}

impl Decision {
  fn allow() -> Self {
    Self {
      allowed: true,
      reasons: Vec::new(),
    }
  }

  fn deny(reason: String) -> Self {
    Self {
      allowed: false,
      reasons: vec![reason],
    }
  }

  pub fn is_allowed(&self) -> bool {
    self.allowed
  }
}

// ─── Policy ──────────────────────────────────────────────────────────────────

/// The caps the engine enforces.
///
/// The defaults are the deployed policy; alternate values exist for testing
/// against other policies without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulePolicy {
  pub max_early_morning_per_month: usize,
  pub max_total_per_month:         usize,
  pub max_thursday_per_month:      usize,
  pub max_general_per_day:         usize,
}

impl Default for RulePolicy {
  fn default() -> Self {
    Self {
      max_early_morning_per_month: 2,
      max_total_per_month:         4,
      max_thursday_per_month:      2,
      max_general_per_day:         1,
    }
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// One constraint in the engine's priority list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
  /// Cap on early-morning shifts per volunteer per calendar month.
  EarlyMorningCapPerMonth,
  /// Cap on shifts of any category per volunteer per calendar month.
  TotalCapPerMonth,
  /// Cap on Thursday shifts per volunteer per calendar month.
  ThursdayCapPerMonth,
  /// At most one general shift per volunteer per calendar day.
  SameDayGeneralExclusive,
}

/// Normal signup window: all four rules, in priority order.
const NORMAL_RULES: &[Rule] = &[
  Rule::EarlyMorningCapPerMonth,
  Rule::TotalCapPerMonth,
  Rule::ThursdayCapPerMonth,
  Rule::SameDayGeneralExclusive,
];

/// Emergency pickups keep only the same-day conflict check.
const EMERGENCY_RULES: &[Rule] = &[Rule::SameDayGeneralExclusive];

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Stateless validator for proposed signups.
///
/// A pure function of its inputs: it reads `history`, performs no I/O, and
/// is safe to call concurrently. Callers must pass a point-in-time snapshot
/// of the signup set, and must serialise validate-then-persist per volunteer
/// if the caps are to hold under concurrent booking requests.
#[derive(Debug, Clone, Default)]
pub struct RulesEngine {
  policy: RulePolicy,
}

impl RulesEngine {
  pub fn new() -> Self {
    Self::default()
  }

  /// An engine with non-default caps.
  pub fn with_policy(policy: RulePolicy) -> Self {
    Self { policy }
  }

  /// Decide whether `volunteer` may take `shift`.
  ///
  /// `history` is the complete signup set known to the system; filtering to
  /// the volunteer happens here. Evaluation stops at the first violated
  /// rule, so `reasons` never carries more than one entry.
  pub fn validate(
    &self,
    volunteer: &Volunteer,
    shift: &Shift,
    history: &[Signup],
    is_emergency: bool,
  ) -> Decision {
    let rules = if is_emergency {
      EMERGENCY_RULES
    } else {
      NORMAL_RULES
    };

    for rule in rules {
      if let Some(reason) = self.check(*rule, volunteer, shift, history) {
        return Decision::deny(reason);
      }
    }
    Decision::allow()
  }

  /// Run a single rule; `Some(message)` on violation.
  fn check(
    &self,
    rule: Rule,
    volunteer: &Volunteer,
    shift: &Shift,
    history: &[Signup],
  ) -> Option<String> {
    match rule {
      Rule::EarlyMorningCapPerMonth => self.check_early_morning_cap(volunteer, shift, history),
      Rule::TotalCapPerMonth => self.check_total_cap(volunteer, shift, history),
      Rule::ThursdayCapPerMonth => self.check_thursday_cap(volunteer, shift, history),
      Rule::SameDayGeneralExclusive => self.check_same_day_general(volunteer, shift, history),
    }
  }

  /// Max N early-morning shifts per volunteer per month. Shifts of the
  /// other category never trigger this rule.
  fn check_early_morning_cap(
    &self,
    volunteer: &Volunteer,
    shift: &Shift,
    history: &[Signup],
  ) -> Option<String> {
    if shift.category != ShiftCategory::EarlyMorning {
      return None;
    }

    let bucket = shift.month_year();
    let count = history
      .iter()
      .filter(|s| {
        s.volunteer_id() == volunteer.id
          && s.shift.category == ShiftCategory::EarlyMorning
          && s.shift.month_year() == bucket
      })
      .count();

    let max = self.policy.max_early_morning_per_month;
    (count >= max).then(|| {
      format!(
        "cannot sign up: you already have {count} early-morning shifts this month (max is {max})"
      )
    })
  }

  /// Max N shifts per volunteer per month, regardless of category.
  fn check_total_cap(
    &self,
    volunteer: &Volunteer,
    shift: &Shift,
    history: &[Signup],
  ) -> Option<String> {
    let bucket = shift.month_year();
    let count = history
      .iter()
      .filter(|s| s.volunteer_id() == volunteer.id && s.shift.month_year() == bucket)
      .count();

    let max = self.policy.max_total_per_month;
    (count >= max)
      .then(|| format!("cannot sign up: you already have {count} shifts this month (max is {max})"))
  }

  /// Max N Thursday shifts per volunteer per month. Candidates on other
  /// weekdays never trigger this rule.
  fn check_thursday_cap(
    &self,
    volunteer: &Volunteer,
    shift: &Shift,
    history: &[Signup],
  ) -> Option<String> {
    if !shift.is_thursday() {
      return None;
    }

    let bucket = shift.month_year();
    let count = history
      .iter()
      .filter(|s| {
        s.volunteer_id() == volunteer.id && s.shift.is_thursday() && s.shift.month_year() == bucket
      })
      .count();

    let max = self.policy.max_thursday_per_month;
    (count >= max).then(|| {
      format!("cannot sign up: you already have {count} Thursday shifts this month (max is {max})")
    })
  }

  /// At most one general shift per volunteer per calendar day. The two
  /// categories may coexist on the same day, so early-morning candidates
  /// never trigger this rule.
  fn check_same_day_general(
    &self,
    volunteer: &Volunteer,
    shift: &Shift,
    history: &[Signup],
  ) -> Option<String> {
    if shift.category != ShiftCategory::General {
      return None;
    }

    let count = history
      .iter()
      .filter(|s| {
        s.volunteer_id() == volunteer.id
          && s.shift.category == ShiftCategory::General
          && s.shift.date == shift.date
      })
      .count();

    (count >= self.policy.max_general_per_day).then(|| {
      "cannot sign up: you already have a general shift on this day (max 1 per day)".to_owned()
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
