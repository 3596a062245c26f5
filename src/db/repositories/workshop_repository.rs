use sqlx::types::Uuid;
use sqlx::PgPool;

use crate::db::models::{Workshop, WorkshopConfiguration};
use crate::db::DatabaseError;

const COLUMNS: &str = "id, dealership_id, name, is_main, is_active, created_at, updated_at";

/// Read-only queries over workshops. The scheduling core never writes here;
/// workshop lifecycle belongs to tenant administration.
pub struct WorkshopRepository;

impl WorkshopRepository {
    /// Find an active workshop by id, scoped to its dealership.
    pub async fn find_for_dealership(
        pool: &PgPool,
        dealership_id: Uuid,
        workshop_id: Uuid,
    ) -> Result<Option<Workshop>, DatabaseError> {
        let query = format!(
            "SELECT {COLUMNS} FROM workshops
             WHERE id = $1 AND dealership_id = $2 AND is_active"
        );
        let workshop = sqlx::query_as::<_, Workshop>(&query)
            .bind(workshop_id)
            .bind(dealership_id)
            .fetch_optional(pool)
            .await?;
        Ok(workshop)
    }

    /// The dealership's workshop flagged as main. At most one active workshop
    /// per dealership carries the flag.
    pub async fn find_main_for_dealership(
        pool: &PgPool,
        dealership_id: Uuid,
    ) -> Result<Option<Workshop>, DatabaseError> {
        let query = format!(
            "SELECT {COLUMNS} FROM workshops
             WHERE dealership_id = $1 AND is_main AND is_active"
        );
        let workshop = sqlx::query_as::<_, Workshop>(&query)
            .bind(dealership_id)
            .fetch_optional(pool)
            .await?;
        Ok(workshop)
    }

    /// Per-workshop scheduling configuration; `None` means defaults apply.
    pub async fn find_configuration(
        pool: &PgPool,
        workshop_id: Uuid,
    ) -> Result<Option<WorkshopConfiguration>, DatabaseError> {
        let config = sqlx::query_as::<_, WorkshopConfiguration>(
            "SELECT workshop_id, shift_duration, timezone
             FROM workshop_configurations WHERE workshop_id = $1",
        )
        .bind(workshop_id)
        .fetch_optional(pool)
        .await?;
        Ok(config)
    }
}
