//! Handler for `POST /signups` — the validated booking path.
//!
//! The handler looks up both entities, snapshots the signup history, runs
//! the scheduling rules engine, and only persists on approval. Note the
//! snapshot is a point-in-time read: two racing requests for the same
//! volunteer can both see a pre-cap count. Serialising bookings per
//! volunteer is the deployment's concern, not this handler's.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use rota_core::{rules::RulesEngine, signup::NewSignup, store::RosterStore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// JSON body accepted by `POST /signups`.
#[derive(Debug, Deserialize)]
pub struct NewSignupBody {
  pub volunteer_id: Uuid,
  pub shift_id:     Uuid,
  #[serde(default)]
  pub is_emergency: bool,
}

#[derive(Debug, Serialize)]
pub struct SignupCreated {
  pub success: bool,
  pub signup:  StoredSignup,
}

#[derive(Debug, Serialize)]
pub struct StoredSignup {
  pub id:           Uuid,
  pub volunteer_id: Uuid,
  pub shift_id:     Uuid,
  pub signed_up_at: DateTime<Utc>,
  pub is_emergency: bool,
}

/// `POST /signups` — body: `{"volunteer_id":..,"shift_id":..,"is_emergency":false}`.
///
/// Responds 201 with the stored signup, 400 with the engine's reason when a
/// rule is violated (or the signup is a duplicate), 404 when either entity
/// is unknown.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewSignupBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let volunteer = store
    .get_volunteer(body.volunteer_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("volunteer {} not found", body.volunteer_id)))?;
  let shift = store
    .get_shift(body.shift_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("shift {} not found", body.shift_id)))?;

  let history = store
    .list_signups()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let decision = RulesEngine::new().validate(&volunteer, &shift, &history, body.is_emergency);
  if !decision.is_allowed() {
    tracing::info!(
      volunteer = %volunteer.id,
      shift = %shift.id,
      reasons = ?decision.reasons,
      "signup rejected"
    );
    return Err(ApiError::Rejected(decision.reasons));
  }

  // Duplicate detection is not a scheduling rule; it gets its own message.
  let duplicate = history
    .iter()
    .any(|s| s.volunteer_id() == body.volunteer_id && s.shift_id() == body.shift_id);
  if duplicate {
    return Err(ApiError::Rejected(vec![
      "you are already signed up for this shift".to_owned(),
    ]));
  }

  let signup = store
    .add_signup(NewSignup {
      volunteer_id: body.volunteer_id,
      shift_id:     body.shift_id,
      is_emergency: body.is_emergency,
    })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok((
    StatusCode::CREATED,
    Json(SignupCreated {
      success: true,
      signup:  StoredSignup {
        id:           signup.id,
        volunteer_id: signup.volunteer_id(),
        shift_id:     signup.shift_id(),
        signed_up_at: signup.signed_up_at,
        is_emergency: signup.is_emergency,
      },
    }),
  ))
}
