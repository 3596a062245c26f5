use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Date, OffsetDateTime, Time};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "appointment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub dealership_id: Uuid,
    pub workshop_id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub service_id: Uuid,
    pub advisor_id: Option<Uuid>,
    pub appointment_date: Date,
    pub appointment_time: Time,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Creation payload. Date and time arrive as strings (`YYYY-MM-DD`,
/// `HH:mm`) and are parsed by the handler before hitting the repository.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub dealership_id: Uuid,
    pub workshop_id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub service_id: Uuid,
    pub advisor_id: Option<Uuid>,
    #[validate(length(min = 1, message = "appointmentDate must not be empty"))]
    pub appointment_date: String,
    #[validate(length(min = 1, message = "appointmentTime must not be empty"))]
    pub appointment_time: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentStatus {
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}
