use serde::Serialize;
use sqlx::types::Uuid;
use time::Date;

/// Engine input. The HTTP layer validates formats before building this, so
/// the engine trusts its fields are well-formed.
#[derive(Debug, Clone)]
pub struct AvailabilityQuery {
    pub dealership_id: Uuid,
    pub workshop_id: Uuid,
    pub service_id: Uuid,
    pub date: Date,
}

/// One advisor's verdict for a specific slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorSlotStatus {
    pub id: Uuid,
    pub name: String,
    pub can_take: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDetail {
    pub available_advisors: i32,
    pub advisors: Vec<AdvisorSlotStatus>,
}

/// A bookable (or not) time slot. `time` is `HH:mm`; the HTTP layer
/// normalizes to `HH:mm:ss` for backward-compatible clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
    pub total_capacity: i32,
    pub details: SlotDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub date: String,
    pub service_id: Uuid,
    pub service_name: String,
    pub slots: Vec<TimeSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
