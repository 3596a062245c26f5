use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{NewNpsResponse, NpsClassification, NpsResponse};
use crate::db::repositories::NpsRepository;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpsScope {
    pub dealership_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NpsSummaryResponse {
    pub promoters: i64,
    pub passives: i64,
    pub detractors: i64,
    pub total: i64,
    pub nps_score: f64,
}

/// POST /api/nps — record a survey response; classification derives from the
/// score, never from the client.
pub async fn record_nps_response(
    State(state): State<AppState>,
    Json(input): Json<NewNpsResponse>,
) -> AppResult<(StatusCode, Json<NpsResponse>)> {
    input.validate()?;
    let classification = NpsClassification::from_score(input.score);
    let response = NpsRepository::create(&state.db, &input, classification).await?;
    tracing::info!(
        response_id = %response.id,
        dealership_id = %response.dealership_id,
        score = response.score,
        "NPS response recorded"
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/nps/summary?dealershipId=...
pub async fn nps_summary(
    State(state): State<AppState>,
    Query(scope): Query<NpsScope>,
) -> AppResult<Json<NpsSummaryResponse>> {
    let dealership_id = scope.dealership_id.ok_or_else(|| {
        AppError::Validation("Missing required parameter: dealershipId".to_string())
    })?;
    let summary = NpsRepository::summary_for_dealership(&state.db, dealership_id).await?;
    Ok(Json(NpsSummaryResponse {
        nps_score: summary.score(),
        promoters: summary.promoters,
        passives: summary.passives,
        detractors: summary.detractors,
        total: summary.total,
    }))
}
