use async_trait::async_trait;
use sqlx::types::Uuid;
use sqlx::PgPool;
use time::Date;

use crate::db::models::{
    AdvisorSlotAssignment, Appointment, OperatingHours, Service, Workshop, WorkshopConfiguration,
};
use crate::db::repositories::{SchedulingRepository, WorkshopRepository};
use crate::db::DatabaseError;

/// Read-only data access required by the availability core.
///
/// Resolver and engine only ever talk to this trait, which keeps them pure
/// functions of external state and lets tests swap in an in-memory store.
/// Every method is a snapshot read; nothing here writes.
#[async_trait]
pub trait SchedulingStore: Send + Sync {
    async fn workshop_by_id(
        &self,
        dealership_id: Uuid,
        workshop_id: Uuid,
    ) -> Result<Option<Workshop>, DatabaseError>;

    async fn main_workshop(&self, dealership_id: Uuid) -> Result<Option<Workshop>, DatabaseError>;

    async fn workshop_configuration(
        &self,
        workshop_id: Uuid,
    ) -> Result<Option<WorkshopConfiguration>, DatabaseError>;

    async fn operating_hours(
        &self,
        workshop_id: Uuid,
        weekday: u8,
    ) -> Result<Option<OperatingHours>, DatabaseError>;

    async fn service_by_id(
        &self,
        dealership_id: Uuid,
        service_id: Uuid,
    ) -> Result<Option<Service>, DatabaseError>;

    async fn advisor_assignments(
        &self,
        workshop_id: Uuid,
    ) -> Result<Vec<AdvisorSlotAssignment>, DatabaseError>;

    async fn appointments_for_date(
        &self,
        workshop_id: Uuid,
        date: Date,
    ) -> Result<Vec<Appointment>, DatabaseError>;
}

/// Postgres-backed store, delegating to the sqlx repositories.
#[derive(Clone)]
pub struct PgSchedulingStore {
    pool: PgPool,
}

impl PgSchedulingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchedulingStore for PgSchedulingStore {
    async fn workshop_by_id(
        &self,
        dealership_id: Uuid,
        workshop_id: Uuid,
    ) -> Result<Option<Workshop>, DatabaseError> {
        WorkshopRepository::find_for_dealership(&self.pool, dealership_id, workshop_id).await
    }

    async fn main_workshop(&self, dealership_id: Uuid) -> Result<Option<Workshop>, DatabaseError> {
        WorkshopRepository::find_main_for_dealership(&self.pool, dealership_id).await
    }

    async fn workshop_configuration(
        &self,
        workshop_id: Uuid,
    ) -> Result<Option<WorkshopConfiguration>, DatabaseError> {
        WorkshopRepository::find_configuration(&self.pool, workshop_id).await
    }

    async fn operating_hours(
        &self,
        workshop_id: Uuid,
        weekday: u8,
    ) -> Result<Option<OperatingHours>, DatabaseError> {
        SchedulingRepository::operating_hours_for_day(&self.pool, workshop_id, weekday).await
    }

    async fn service_by_id(
        &self,
        dealership_id: Uuid,
        service_id: Uuid,
    ) -> Result<Option<Service>, DatabaseError> {
        SchedulingRepository::service_for_dealership(&self.pool, dealership_id, service_id).await
    }

    async fn advisor_assignments(
        &self,
        workshop_id: Uuid,
    ) -> Result<Vec<AdvisorSlotAssignment>, DatabaseError> {
        SchedulingRepository::advisor_assignments(&self.pool, workshop_id).await
    }

    async fn appointments_for_date(
        &self,
        workshop_id: Uuid,
        date: Date,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        SchedulingRepository::appointments_for_date(&self.pool, workshop_id, date).await
    }
}
