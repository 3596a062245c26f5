use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::types::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{NewVehicle, UpdateVehicle, Vehicle};
use crate::db::repositories::VehicleRepository;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListParams {
    pub dealership_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
}

/// POST /api/vehicles
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(input): Json<NewVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    input.validate()?;
    let vehicle = VehicleRepository::create(&state.db, &input).await?;
    tracing::info!(vehicle_id = %vehicle.id, client_id = %vehicle.client_id, "vehicle created");
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /api/vehicles?dealershipId=...&clientId=...
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<VehicleListParams>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let dealership_id = params.dealership_id.ok_or_else(|| {
        AppError::Validation("Missing required parameter: dealershipId".to_string())
    })?;
    let vehicles = VehicleRepository::list(&state.db, dealership_id, params.client_id).await?;
    Ok(Json(vehicles))
}

/// GET /api/vehicles/:id?dealershipId=...
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<VehicleListParams>,
) -> AppResult<Json<Vehicle>> {
    let dealership_id = params.dealership_id.ok_or_else(|| {
        AppError::Validation("Missing required parameter: dealershipId".to_string())
    })?;
    let vehicle = VehicleRepository::find_by_id(&state.db, dealership_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {id} not found")))?;
    Ok(Json(vehicle))
}

/// PUT /api/vehicles/:id?dealershipId=...
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<VehicleListParams>,
    Json(input): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    input.validate()?;
    let dealership_id = params.dealership_id.ok_or_else(|| {
        AppError::Validation("Missing required parameter: dealershipId".to_string())
    })?;
    let vehicle = VehicleRepository::update(&state.db, dealership_id, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {id} not found")))?;
    Ok(Json(vehicle))
}
