use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

use crate::error::{AppError, AppResult};
use crate::scheduling::engine::compute_availability;
use crate::scheduling::resolver::resolve_workshop;
use crate::scheduling::store::SchedulingStore;
use crate::scheduling::time::{parse_date, spanish_day_name};
use crate::scheduling::types::AvailabilityQuery;

pub type SharedStore = Arc<dyn SchedulingStore>;

/// Raw query parameters. Everything is optional at the serde level so the
/// handler can produce the contractual "Missing required parameter" bodies
/// instead of axum's generic rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorAvailabilityParams {
    pub dealership_id: Option<String>,
    pub workshop_id: Option<String>,
    pub service_id: Option<String>,
    pub date: Option<String>,
}

/// Backward-compatible response shape: flat list of bookable `HH:mm:ss`
/// starts plus the Spanish day name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorAvailabilityResponse {
    pub available_slots: Vec<String>,
    pub total_slots: usize,
    pub day_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /api/availability/advisors
pub async fn advisor_availability(
    State(store): State<SharedStore>,
    Query(params): Query<AdvisorAvailabilityParams>,
) -> AppResult<Json<AdvisorAvailabilityResponse>> {
    let dealership_id = require_uuid(params.dealership_id.as_deref(), "dealershipId")?;
    let explicit_workshop = params
        .workshop_id
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(|raw| parse_uuid(raw, "workshopId"))
        .transpose()?;
    let service_id = require_uuid(params.service_id.as_deref(), "serviceId")?;

    let raw_date = params
        .date
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| AppError::Validation("Missing required parameter: date".to_string()))?;
    let date = parse_date(raw_date).map_err(|_| {
        AppError::Validation("Invalid date format. Expected YYYY-MM-DD".to_string())
    })?;

    let workshop_id = resolve_workshop(store.as_ref(), dealership_id, explicit_workshop).await?;

    let query = AvailabilityQuery {
        dealership_id,
        workshop_id,
        service_id,
        date,
    };
    let availability = compute_availability(store.as_ref(), &query).await?;

    let available_slots: Vec<String> = availability
        .slots
        .iter()
        .filter(|slot| slot.available)
        .map(|slot| format!("{}:00", slot.time))
        .collect();

    tracing::debug!(
        %dealership_id,
        %workshop_id,
        %service_id,
        date = %raw_date,
        available = available_slots.len(),
        "computed advisor availability"
    );

    Ok(Json(AdvisorAvailabilityResponse {
        total_slots: available_slots.len(),
        available_slots,
        day_name: spanish_day_name(date.weekday()).to_string(),
        message: availability.message,
    }))
}

fn require_uuid(value: Option<&str>, name: &str) -> Result<Uuid, AppError> {
    let raw = value
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| AppError::Validation(format!("Missing required parameter: {name}")))?;
    parse_uuid(raw, name)
}

/// Hyphenated UUID only, matching the original endpoint's regex.
fn parse_uuid(raw: &str, name: &str) -> Result<Uuid, AppError> {
    if raw.len() == 36 {
        if let Ok(id) = Uuid::parse_str(raw) {
            return Ok(id);
        }
    }
    Err(AppError::Validation(format!(
        "Invalid {name} format. Expected a UUID"
    )))
}
