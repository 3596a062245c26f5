use sqlx::types::Uuid;
use sqlx::PgPool;
use time::Date;

use crate::db::models::{AdvisorSlotAssignment, Appointment, OperatingHours, Service};
use crate::db::DatabaseError;

/// Read-only lookups feeding the availability engine.
pub struct SchedulingRepository;

impl SchedulingRepository {
    /// Operating hours for a workshop on a given weekday (1 = Monday .. 7 =
    /// Sunday). No row means the workshop does not open that day.
    pub async fn operating_hours_for_day(
        pool: &PgPool,
        workshop_id: Uuid,
        weekday: u8,
    ) -> Result<Option<OperatingHours>, DatabaseError> {
        let hours = sqlx::query_as::<_, OperatingHours>(
            "SELECT id, workshop_id, weekday, opening_time, closing_time,
                    max_simultaneous_services, is_working_day
             FROM operating_hours WHERE workshop_id = $1 AND weekday = $2",
        )
        .bind(workshop_id)
        .bind(weekday as i16)
        .fetch_optional(pool)
        .await?;
        Ok(hours)
    }

    pub async fn service_for_dealership(
        pool: &PgPool,
        dealership_id: Uuid,
        service_id: Uuid,
    ) -> Result<Option<Service>, DatabaseError> {
        let service = sqlx::query_as::<_, Service>(
            "SELECT id, dealership_id, name, duration_minutes, is_active
             FROM services WHERE id = $1 AND dealership_id = $2 AND is_active",
        )
        .bind(service_id)
        .bind(dealership_id)
        .fetch_optional(pool)
        .await?;
        Ok(service)
    }

    /// Slot configuration for every active advisor of a workshop, one row per
    /// (advisor, position, service) triple, ordered for deterministic output.
    pub async fn advisor_assignments(
        pool: &PgPool,
        workshop_id: Uuid,
    ) -> Result<Vec<AdvisorSlotAssignment>, DatabaseError> {
        let assignments = sqlx::query_as::<_, AdvisorSlotAssignment>(
            "SELECT c.advisor_id, a.name AS advisor_name, c.slot_position, c.service_id
             FROM advisor_slot_config c
             JOIN advisors a ON a.id = c.advisor_id
             WHERE a.workshop_id = $1 AND a.is_active
             ORDER BY a.name, c.advisor_id, c.slot_position",
        )
        .bind(workshop_id)
        .fetch_all(pool)
        .await?;
        Ok(assignments)
    }

    /// Existing bookings for a workshop and date, cancelled ones included;
    /// the engine filters by status.
    pub async fn appointments_for_date(
        pool: &PgPool,
        workshop_id: Uuid,
        date: Date,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT id, dealership_id, workshop_id, client_id, vehicle_id, service_id,
                    advisor_id, appointment_date, appointment_time, status, notes,
                    created_at, updated_at
             FROM appointments
             WHERE workshop_id = $1 AND appointment_date = $2
             ORDER BY appointment_time",
        )
        .bind(workshop_id)
        .bind(date)
        .fetch_all(pool)
        .await?;
        Ok(appointments)
    }
}
