//! Handlers for `/shifts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/shifts` | Optional `?month=1&year=2026`; defaults to the current UTC month |
//! | `POST` | `/shifts` | Body: [`CreateBody`]; returns 201 + stored shift |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::NaiveDate;
use rota_core::{
  shift::{Shift, ShiftCategory},
  store::RosterStore,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::ApiError, month_defaults};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Calendar month 1–12. Defaults to the current UTC month.
  pub month: Option<u32>,
  /// Full year, e.g. 2026. Defaults to the current UTC year.
  pub year:  Option<i32>,
}

/// A shift together with its current occupancy.
#[derive(Debug, Serialize)]
pub struct ShiftSummary {
  pub id:              Uuid,
  pub date:            NaiveDate,
  pub category:        ShiftCategory,
  pub max_capacity:    u32,
  pub current_signups: usize,
  pub spots_available: u32,
  pub start_time:      String,
  pub end_time:        String,
  pub is_full:         bool,
}

/// `GET /shifts[?month=<1-12>&year=<year>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<ShiftSummary>>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let (year, month) = month_defaults(params.month, params.year);

  let shifts = store
    .shifts_in_month(year, month)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let signups = store
    .list_signups()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let summaries = shifts
    .into_iter()
    .map(|shift| {
      let current = signups.iter().filter(|s| s.shift_id() == shift.id).count();
      ShiftSummary {
        id:              shift.id,
        date:            shift.date,
        category:        shift.category,
        max_capacity:    shift.max_capacity,
        current_signups: current,
        spots_available: shift.max_capacity.saturating_sub(current as u32),
        start_time:      shift.start_time,
        end_time:        shift.end_time,
        is_full:         current as u32 >= shift.max_capacity,
      }
    })
    .collect();

  Ok(Json(summaries))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /shifts`.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub date:         NaiveDate,
  pub category:     ShiftCategory,
  pub max_capacity: u32,
  pub start_time:   String,
  pub end_time:     String,
}

/// `POST /shifts` — returns 201 + the stored [`Shift`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let shift = Shift::new(
    Uuid::new_v4(),
    body.date,
    body.category,
    body.max_capacity,
    body.start_time,
    body.end_time,
  )
  .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let shift = store
    .add_shift(shift)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(shift)))
}
