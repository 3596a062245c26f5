use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Date, OffsetDateTime};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "reminder_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Pending,
    Sent,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub dealership_id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub reminder_type: String,
    pub due_date: Date,
    pub status: ReminderStatus,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub dealership_id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    #[validate(length(min = 1, message = "reminderType must not be empty"))]
    pub reminder_type: String,
    #[validate(length(min = 1, message = "dueDate must not be empty"))]
    pub due_date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderStatus {
    pub status: ReminderStatus,
}
