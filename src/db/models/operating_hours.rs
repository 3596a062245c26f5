use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::Time;

/// One row per workshop and weekday (1 = Monday .. 7 = Sunday).
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct OperatingHours {
    pub id: Uuid,
    pub workshop_id: Uuid,
    pub weekday: i16,
    pub opening_time: Time,
    pub closing_time: Time,
    pub max_simultaneous_services: i32,
    pub is_working_day: bool,
}
