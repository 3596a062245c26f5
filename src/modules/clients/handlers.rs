use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::types::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{Client, NewClient, UpdateClient};
use crate::db::repositories::ClientRepository;
use crate::error::{AppError, AppResult};

/// Tenant scope for collection endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealershipScope {
    pub dealership_id: Option<Uuid>,
}

impl DealershipScope {
    pub fn require(&self) -> Result<Uuid, AppError> {
        self.dealership_id.ok_or_else(|| {
            AppError::Validation("Missing required parameter: dealershipId".to_string())
        })
    }
}

/// POST /api/clients
pub async fn create_client(
    State(state): State<AppState>,
    Json(input): Json<NewClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    input.validate()?;
    let client = ClientRepository::create(&state.db, &input).await?;
    tracing::info!(client_id = %client.id, dealership_id = %client.dealership_id, "client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients?dealershipId=...
pub async fn list_clients(
    State(state): State<AppState>,
    Query(scope): Query<DealershipScope>,
) -> AppResult<Json<Vec<Client>>> {
    let dealership_id = scope.require()?;
    let clients = ClientRepository::list_for_dealership(&state.db, dealership_id).await?;
    Ok(Json(clients))
}

/// GET /api/clients/:id?dealershipId=...
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<DealershipScope>,
) -> AppResult<Json<Client>> {
    let dealership_id = scope.require()?;
    let client = ClientRepository::find_by_id(&state.db, dealership_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {id} not found")))?;
    Ok(Json(client))
}

/// PUT /api/clients/:id?dealershipId=...
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<DealershipScope>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    input.validate()?;
    let dealership_id = scope.require()?;
    let client = ClientRepository::update(&state.db, dealership_id, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {id} not found")))?;
    Ok(Json(client))
}

/// DELETE /api/clients/:id?dealershipId=...
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(scope): Query<DealershipScope>,
) -> AppResult<StatusCode> {
    let dealership_id = scope.require()?;
    let deleted = ClientRepository::delete(&state.db, dealership_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Client {id} not found")))
    }
}
