use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Workshop {
    pub id: Uuid,
    pub dealership_id: Uuid,
    pub name: String,
    pub is_main: bool,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Per-workshop scheduling configuration. Absence of a row is normal; the
/// resolver merges built-in defaults over it.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct WorkshopConfiguration {
    pub workshop_id: Uuid,
    pub shift_duration: i32,
    pub timezone: String,
}
