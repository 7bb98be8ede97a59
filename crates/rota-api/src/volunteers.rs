//! Handlers for `/volunteers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/volunteers` | All registered volunteers |
//! | `POST` | `/volunteers` | Body: [`CreateBody`]; 400 on invalid fields |
//! | `GET`  | `/volunteers/:id` | 404 if not found |
//! | `GET`  | `/volunteers/:id/quota` | Monthly usage vs the caps |
//! | `GET`  | `/volunteers/:id/signups` | The volunteer's signups for a month |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{DateTime, NaiveDate, Utc};
use rota_core::{
  quota::{MonthlyQuota, monthly_quota},
  rules::RulePolicy,
  shift::ShiftCategory,
  store::RosterStore,
  volunteer::Volunteer,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::ApiError, month_defaults};

// ─── List / create / get ──────────────────────────────────────────────────────

/// `GET /volunteers`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Volunteer>>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let volunteers = store
    .list_volunteers()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(volunteers))
}

/// JSON body accepted by `POST /volunteers`.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:  String,
  pub phone: String,
  #[serde(default)]
  pub email: String,
}

/// `POST /volunteers` — returns 201 + the stored [`Volunteer`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let volunteer = Volunteer::new(Uuid::new_v4(), body.name, body.phone, body.email)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let volunteer = store
    .add_volunteer(volunteer)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(volunteer)))
}

/// `GET /volunteers/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Volunteer>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let volunteer = store
    .get_volunteer(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("volunteer {id} not found")))?;
  Ok(Json(volunteer))
}

// ─── Quota ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MonthParams {
  pub month: Option<u32>,
  pub year:  Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct QuotaResponse {
  pub volunteer_id: Uuid,
  pub month:        u32,
  pub year:         i32,
  pub quota:        MonthlyQuota,
}

/// `GET /volunteers/:id/quota[?month=<1-12>&year=<year>]`
pub async fn quota<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Query(params): Query<MonthParams>,
) -> Result<Json<QuotaResponse>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let (year, month) = month_defaults(params.month, params.year);

  let volunteer = store
    .get_volunteer(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("volunteer {id} not found")))?;

  let signups = store
    .list_signups()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let quota = monthly_quota(&volunteer, year, month, &signups, &RulePolicy::default());
  Ok(Json(QuotaResponse {
    volunteer_id: id,
    month,
    year,
    quota,
  }))
}

// ─── Signups for a volunteer ──────────────────────────────────────────────────

/// One signup flattened to wire form.
#[derive(Debug, Serialize)]
pub struct SignupSummary {
  pub id:           Uuid,
  pub shift_id:     Uuid,
  pub date:         NaiveDate,
  pub category:     ShiftCategory,
  pub start_time:   String,
  pub end_time:     String,
  pub signed_up_at: DateTime<Utc>,
  pub is_emergency: bool,
}

#[derive(Debug, Serialize)]
pub struct SignupsResponse {
  pub volunteer_id: Uuid,
  pub month:        u32,
  pub year:         i32,
  pub signups:      Vec<SignupSummary>,
}

/// `GET /volunteers/:id/signups[?month=<1-12>&year=<year>]`
pub async fn signups<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Query(params): Query<MonthParams>,
) -> Result<Json<SignupsResponse>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let (year, month) = month_defaults(params.month, params.year);

  let signups = store
    .signups_for_volunteer(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let summaries = signups
    .into_iter()
    .filter(|s| s.shift.month_year() == (year, month))
    .map(|s| SignupSummary {
      id:           s.id,
      shift_id:     s.shift_id(),
      date:         s.shift.date,
      category:     s.shift.category,
      start_time:   s.shift.start_time.clone(),
      end_time:     s.shift.end_time.clone(),
      signed_up_at: s.signed_up_at,
      is_emergency: s.is_emergency,
    })
    .collect();

  Ok(Json(SignupsResponse {
    volunteer_id: id,
    month,
    year,
    signups: summaries,
  }))
}
