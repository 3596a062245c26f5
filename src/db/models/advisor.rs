use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[allow(unused)]
pub struct Advisor {
    pub id: Uuid,
    pub dealership_id: Uuid,
    pub workshop_id: Uuid,
    pub name: String,
    pub is_active: bool,
}

/// Joined advisor + slot configuration row: one entry per configured slot
/// position and service the advisor can perform at that position.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AdvisorSlotAssignment {
    pub advisor_id: Uuid,
    pub advisor_name: String,
    pub slot_position: i32,
    pub service_id: Uuid,
}
