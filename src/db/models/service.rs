use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub dealership_id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub is_active: bool,
}
