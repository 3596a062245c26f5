use sqlx::types::Uuid;
use sqlx::PgPool;

use crate::db::models::{Client, NewClient, UpdateClient};
use crate::db::DatabaseError;

const COLUMNS: &str = "id, dealership_id, name, email, phone, created_at, updated_at";

pub struct ClientRepository;

impl ClientRepository {
    pub async fn create(pool: &PgPool, input: &NewClient) -> Result<Client, DatabaseError> {
        let query = format!(
            "INSERT INTO clients (dealership_id, name, email, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let client = sqlx::query_as::<_, Client>(&query)
            .bind(input.dealership_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await?;
        Ok(client)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        dealership_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Client>, DatabaseError> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1 AND dealership_id = $2");
        let client = sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(dealership_id)
            .fetch_optional(pool)
            .await?;
        Ok(client)
    }

    pub async fn list_for_dealership(
        pool: &PgPool,
        dealership_id: Uuid,
    ) -> Result<Vec<Client>, DatabaseError> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients WHERE dealership_id = $1 ORDER BY created_at DESC"
        );
        let clients = sqlx::query_as::<_, Client>(&query)
            .bind(dealership_id)
            .fetch_all(pool)
            .await?;
        Ok(clients)
    }

    pub async fn update(
        pool: &PgPool,
        dealership_id: Uuid,
        id: Uuid,
        input: &UpdateClient,
    ) -> Result<Option<Client>, DatabaseError> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($3, name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                updated_at = NOW()
             WHERE id = $1 AND dealership_id = $2
             RETURNING {COLUMNS}"
        );
        let client = sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(dealership_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await?;
        Ok(client)
    }

    pub async fn delete(
        pool: &PgPool,
        dealership_id: Uuid,
        id: Uuid,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1 AND dealership_id = $2")
            .bind(id)
            .bind(dealership_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
