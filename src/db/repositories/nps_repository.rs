use sqlx::types::Uuid;
use sqlx::PgPool;

use crate::db::models::{NewNpsResponse, NpsClassification, NpsResponse, NpsSummary};
use crate::db::DatabaseError;

pub struct NpsRepository;

impl NpsRepository {
    pub async fn create(
        pool: &PgPool,
        input: &NewNpsResponse,
        classification: NpsClassification,
    ) -> Result<NpsResponse, DatabaseError> {
        let response = sqlx::query_as::<_, NpsResponse>(
            "INSERT INTO nps_responses (dealership_id, client_id, score, classification, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, dealership_id, client_id, score, classification, comment, created_at",
        )
        .bind(input.dealership_id)
        .bind(input.client_id)
        .bind(input.score)
        .bind(classification)
        .bind(&input.comment)
        .fetch_one(pool)
        .await?;
        Ok(response)
    }

    pub async fn summary_for_dealership(
        pool: &PgPool,
        dealership_id: Uuid,
    ) -> Result<NpsSummary, DatabaseError> {
        let summary = sqlx::query_as::<_, NpsSummary>(
            "SELECT
                COUNT(*) FILTER (WHERE classification = 'promoter') AS promoters,
                COUNT(*) FILTER (WHERE classification = 'passive') AS passives,
                COUNT(*) FILTER (WHERE classification = 'detractor') AS detractors,
                COUNT(*) AS total
             FROM nps_responses WHERE dealership_id = $1",
        )
        .bind(dealership_id)
        .fetch_one(pool)
        .await?;
        Ok(summary)
    }
}
