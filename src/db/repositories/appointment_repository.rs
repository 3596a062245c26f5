use sqlx::types::Uuid;
use sqlx::PgPool;
use time::{Date, Time};

use crate::db::models::{Appointment, AppointmentStatus, UpdateAppointmentStatus};
use crate::db::DatabaseError;

const COLUMNS: &str = "id, dealership_id, workshop_id, client_id, vehicle_id, service_id, \
     advisor_id, appointment_date, appointment_time, status, notes, created_at, updated_at";

/// Parsed creation input: the handler has already validated the payload and
/// parsed the date/time strings.
pub struct AppointmentInsert {
    pub dealership_id: Uuid,
    pub workshop_id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    pub service_id: Uuid,
    pub advisor_id: Option<Uuid>,
    pub appointment_date: Date,
    pub appointment_time: Time,
    pub notes: Option<String>,
}

pub struct AppointmentRepository;

impl AppointmentRepository {
    pub async fn create(
        pool: &PgPool,
        input: &AppointmentInsert,
    ) -> Result<Appointment, DatabaseError> {
        let query = format!(
            "INSERT INTO appointments (dealership_id, workshop_id, client_id, vehicle_id,
                                       service_id, advisor_id, appointment_date,
                                       appointment_time, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(input.dealership_id)
            .bind(input.workshop_id)
            .bind(input.client_id)
            .bind(input.vehicle_id)
            .bind(input.service_id)
            .bind(input.advisor_id)
            .bind(input.appointment_date)
            .bind(input.appointment_time)
            .bind(&input.notes)
            .fetch_one(pool)
            .await?;
        Ok(appointment)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        dealership_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Appointment>, DatabaseError> {
        let query =
            format!("SELECT {COLUMNS} FROM appointments WHERE id = $1 AND dealership_id = $2");
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(dealership_id)
            .fetch_optional(pool)
            .await?;
        Ok(appointment)
    }

    pub async fn list_for_workshop_date(
        pool: &PgPool,
        workshop_id: Uuid,
        date: Date,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        let query = format!(
            "SELECT {COLUMNS} FROM appointments
             WHERE workshop_id = $1 AND appointment_date = $2
             ORDER BY appointment_time"
        );
        let appointments = sqlx::query_as::<_, Appointment>(&query)
            .bind(workshop_id)
            .bind(date)
            .fetch_all(pool)
            .await?;
        Ok(appointments)
    }

    pub async fn update_status(
        pool: &PgPool,
        dealership_id: Uuid,
        id: Uuid,
        input: &UpdateAppointmentStatus,
    ) -> Result<Option<Appointment>, DatabaseError> {
        let query = format!(
            "UPDATE appointments SET
                status = $3,
                notes = COALESCE($4, notes),
                updated_at = NOW()
             WHERE id = $1 AND dealership_id = $2
             RETURNING {COLUMNS}"
        );
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(dealership_id)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await?;
        Ok(appointment)
    }

    /// Cancel an appointment. Returns `false` if it does not exist or was
    /// already cancelled.
    pub async fn cancel(
        pool: &PgPool,
        dealership_id: Uuid,
        id: Uuid,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            "UPDATE appointments SET status = $3, updated_at = NOW()
             WHERE id = $1 AND dealership_id = $2 AND status <> $3",
        )
        .bind(id)
        .bind(dealership_id)
        .bind(AppointmentStatus::Cancelled)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
