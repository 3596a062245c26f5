use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::types::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{Appointment, NewAppointment, UpdateAppointmentStatus};
use crate::db::repositories::{AppointmentInsert, AppointmentRepository};
use crate::error::{AppError, AppResult};
use crate::scheduling::time::{parse_clock_time, parse_date};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentListParams {
    pub workshop_id: Option<Uuid>,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentScope {
    pub dealership_id: Option<Uuid>,
}

impl AppointmentScope {
    fn require(&self) -> Result<Uuid, AppError> {
        self.dealership_id.ok_or_else(|| {
            AppError::Validation("Missing required parameter: dealershipId".to_string())
        })
    }
}

/// POST /api/appointments
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(input): Json<NewAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    input.validate()?;

    let appointment_date = parse_date(&input.appointment_date).map_err(|_| {
        AppError::Validation("Invalid appointmentDate format. Expected YYYY-MM-DD".to_string())
    })?;
    let appointment_time = parse_clock_time(&input.appointment_time).map_err(|_| {
        AppError::Validation("Invalid appointmentTime format. Expected HH:mm".to_string())
    })?;

    let insert = AppointmentInsert {
        dealership_id: input.dealership_id,
        workshop_id: input.workshop_id,
        client_id: input.client_id,
        vehicle_id: input.vehicle_id,
        service_id: input.service_id,
        advisor_id: input.advisor_id,
        appointment_date,
        appointment_time,
        notes: input.notes.clone(),
    };
    let appointment = AppointmentRepository::create(&state.db, &insert).await?;
    tracing::info!(
        appointment_id = %appointment.id,
        workshop_id = %appointment.workshop_id,
        date = %input.appointment_date,
        time = %input.appointment_time,
        "appointment created"
    );
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// GET /api/appointments?workshopId=...&date=...
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(params): Query<AppointmentListParams>,
) -> AppResult<Json<Vec<Appointment>>> {
    let workshop_id = params.workshop_id.ok_or_else(|| {
        AppError::Validation("Missing required parameter: workshopId".to_string())
    })?;
    let raw_date = params
        .date
        .as_deref()
        .ok_or_else(|| AppError::Validation("Missing required parameter: date".to_string()))?;
    let date = parse_date(raw_date).map_err(|_| {
        AppError::Validation("Invalid date format. Expected YYYY-MM-DD".to_string())
    })?;

    let appointments =
        AppointmentRepository::list_for_workshop_date(&state.db, workshop_id, date).await?;
    Ok(Json(appointments))
}

/// GET /api/appointments/:id?dealershipId=...
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<AppointmentScope>,
) -> AppResult<Json<Appointment>> {
    let dealership_id = scope.require()?;
    let appointment = AppointmentRepository::find_by_id(&state.db, dealership_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {id} not found")))?;
    Ok(Json(appointment))
}

/// PUT /api/appointments/:id/status?dealershipId=...
pub async fn update_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<AppointmentScope>,
    Json(input): Json<UpdateAppointmentStatus>,
) -> AppResult<Json<Appointment>> {
    input.validate()?;
    let dealership_id = scope.require()?;
    let appointment = AppointmentRepository::update_status(&state.db, dealership_id, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {id} not found")))?;
    Ok(Json(appointment))
}

/// DELETE /api/appointments/:id?dealershipId=... (cancels, never removes)
pub async fn cancel_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<AppointmentScope>,
) -> AppResult<StatusCode> {
    let dealership_id = scope.require()?;
    let cancelled = AppointmentRepository::cancel(&state.db, dealership_id, id).await?;
    if cancelled {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Appointment {id} not found or already cancelled"
        )))
    }
}
