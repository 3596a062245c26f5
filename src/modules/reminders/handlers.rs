use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::types::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{NewReminder, Reminder, UpdateReminderStatus};
use crate::db::repositories::ReminderRepository;
use crate::error::{AppError, AppResult};
use crate::scheduling::time::parse_date;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderScope {
    pub dealership_id: Option<Uuid>,
}

impl ReminderScope {
    fn require(&self) -> Result<Uuid, AppError> {
        self.dealership_id.ok_or_else(|| {
            AppError::Validation("Missing required parameter: dealershipId".to_string())
        })
    }
}

/// POST /api/reminders
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(input): Json<NewReminder>,
) -> AppResult<(StatusCode, Json<Reminder>)> {
    input.validate()?;
    let due_date = parse_date(&input.due_date).map_err(|_| {
        AppError::Validation("Invalid dueDate format. Expected YYYY-MM-DD".to_string())
    })?;

    let reminder = ReminderRepository::create(&state.db, &input, due_date).await?;
    tracing::info!(
        reminder_id = %reminder.id,
        client_id = %reminder.client_id,
        due_date = %input.due_date,
        "reminder created"
    );
    Ok((StatusCode::CREATED, Json(reminder)))
}

/// GET /api/reminders?dealershipId=... — pending reminders, soonest first.
pub async fn list_pending_reminders(
    State(state): State<AppState>,
    Query(scope): Query<ReminderScope>,
) -> AppResult<Json<Vec<Reminder>>> {
    let dealership_id = scope.require()?;
    let reminders = ReminderRepository::list_pending(&state.db, dealership_id).await?;
    Ok(Json(reminders))
}

/// PUT /api/reminders/:id/status?dealershipId=...
pub async fn update_reminder_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<ReminderScope>,
    Json(input): Json<UpdateReminderStatus>,
) -> AppResult<Json<Reminder>> {
    input.validate()?;
    let dealership_id = scope.require()?;
    let reminder = ReminderRepository::update_status(&state.db, dealership_id, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reminder {id} not found")))?;
    Ok(Json(reminder))
}
