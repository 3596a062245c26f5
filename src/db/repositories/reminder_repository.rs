use sqlx::types::Uuid;
use sqlx::PgPool;
use time::Date;

use crate::db::models::{NewReminder, Reminder, ReminderStatus, UpdateReminderStatus};
use crate::db::DatabaseError;

const COLUMNS: &str = "id, dealership_id, client_id, vehicle_id, reminder_type, due_date, \
     status, notes, created_at, updated_at";

pub struct ReminderRepository;

impl ReminderRepository {
    pub async fn create(
        pool: &PgPool,
        input: &NewReminder,
        due_date: Date,
    ) -> Result<Reminder, DatabaseError> {
        let query = format!(
            "INSERT INTO reminders (dealership_id, client_id, vehicle_id, reminder_type,
                                    due_date, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let reminder = sqlx::query_as::<_, Reminder>(&query)
            .bind(input.dealership_id)
            .bind(input.client_id)
            .bind(input.vehicle_id)
            .bind(&input.reminder_type)
            .bind(due_date)
            .bind(&input.notes)
            .fetch_one(pool)
            .await?;
        Ok(reminder)
    }

    /// Pending reminders for a dealership, soonest due first.
    pub async fn list_pending(
        pool: &PgPool,
        dealership_id: Uuid,
    ) -> Result<Vec<Reminder>, DatabaseError> {
        let query = format!(
            "SELECT {COLUMNS} FROM reminders
             WHERE dealership_id = $1 AND status = $2
             ORDER BY due_date"
        );
        let reminders = sqlx::query_as::<_, Reminder>(&query)
            .bind(dealership_id)
            .bind(ReminderStatus::Pending)
            .fetch_all(pool)
            .await?;
        Ok(reminders)
    }

    pub async fn update_status(
        pool: &PgPool,
        dealership_id: Uuid,
        id: Uuid,
        input: &UpdateReminderStatus,
    ) -> Result<Option<Reminder>, DatabaseError> {
        let query = format!(
            "UPDATE reminders SET status = $3, updated_at = NOW()
             WHERE id = $1 AND dealership_id = $2
             RETURNING {COLUMNS}"
        );
        let reminder = sqlx::query_as::<_, Reminder>(&query)
            .bind(id)
            .bind(dealership_id)
            .bind(&input.status)
            .fetch_optional(pool)
            .await?;
        Ok(reminder)
    }
}
