//! Appointment availability core: time arithmetic, workshop resolution, and
//! the slot/capacity engine. Everything here is a read/compute path against
//! the injected [`store::SchedulingStore`]; no persisted state is mutated.

pub mod engine;
pub mod resolver;
pub mod shift;
pub mod store;
pub mod time;
pub mod types;

use sqlx::types::Uuid;
use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("Workshop {workshop_id} not found for dealership {dealership_id}")]
    InvalidWorkshop {
        workshop_id: Uuid,
        dealership_id: Uuid,
    },

    #[error("No main workshop configured for dealership {0}")]
    MainWorkshopNotFound(Uuid),

    #[error("Service {0} not found")]
    ServiceNotFound(Uuid),

    #[error(transparent)]
    DataAccess(#[from] DatabaseError),
}
