use sqlx::types::Uuid;
use sqlx::PgPool;

use crate::db::models::{NewVehicle, UpdateVehicle, Vehicle};
use crate::db::DatabaseError;

const COLUMNS: &str =
    "id, dealership_id, client_id, make, model, year, plate, vin, created_at, updated_at";

pub struct VehicleRepository;

impl VehicleRepository {
    pub async fn create(pool: &PgPool, input: &NewVehicle) -> Result<Vehicle, DatabaseError> {
        let query = format!(
            "INSERT INTO vehicles (dealership_id, client_id, make, model, year, plate, vin)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let vehicle = sqlx::query_as::<_, Vehicle>(&query)
            .bind(input.dealership_id)
            .bind(input.client_id)
            .bind(&input.make)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.plate)
            .bind(&input.vin)
            .fetch_one(pool)
            .await?;
        Ok(vehicle)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        dealership_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Vehicle>, DatabaseError> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1 AND dealership_id = $2");
        let vehicle = sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(dealership_id)
            .fetch_optional(pool)
            .await?;
        Ok(vehicle)
    }

    /// List a dealership's vehicles, optionally narrowed to one client.
    pub async fn list(
        pool: &PgPool,
        dealership_id: Uuid,
        client_id: Option<Uuid>,
    ) -> Result<Vec<Vehicle>, DatabaseError> {
        let query = format!(
            "SELECT {COLUMNS} FROM vehicles
             WHERE dealership_id = $1 AND ($2::uuid IS NULL OR client_id = $2)
             ORDER BY created_at DESC"
        );
        let vehicles = sqlx::query_as::<_, Vehicle>(&query)
            .bind(dealership_id)
            .bind(client_id)
            .fetch_all(pool)
            .await?;
        Ok(vehicles)
    }

    pub async fn update(
        pool: &PgPool,
        dealership_id: Uuid,
        id: Uuid,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, DatabaseError> {
        let query = format!(
            "UPDATE vehicles SET
                make = COALESCE($3, make),
                model = COALESCE($4, model),
                year = COALESCE($5, year),
                plate = COALESCE($6, plate),
                vin = COALESCE($7, vin),
                updated_at = NOW()
             WHERE id = $1 AND dealership_id = $2
             RETURNING {COLUMNS}"
        );
        let vehicle = sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(dealership_id)
            .bind(&input.make)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.plate)
            .bind(&input.vin)
            .fetch_optional(pool)
            .await?;
        Ok(vehicle)
    }
}
