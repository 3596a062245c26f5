use sqlx::types::Uuid;

use crate::scheduling::store::SchedulingStore;
use crate::scheduling::SchedulingError;

pub const DEFAULT_SLOT_DURATION: u16 = 30;
pub const DEFAULT_TIMEZONE: &str = "America/Mexico_City";

/// Effective scheduling settings for a workshop: explicit configuration
/// merged over the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSettings {
    pub slot_duration: u16,
    pub timezone: String,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            slot_duration: DEFAULT_SLOT_DURATION,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Resolve which workshop a request operates against.
///
/// An explicit `workshop_id` must exist and belong to the dealership; when
/// omitted, the dealership's main workshop is used.
pub async fn resolve_workshop(
    store: &dyn SchedulingStore,
    dealership_id: Uuid,
    workshop_id: Option<Uuid>,
) -> Result<Uuid, SchedulingError> {
    match workshop_id {
        Some(id) => {
            let workshop = store
                .workshop_by_id(dealership_id, id)
                .await?
                .ok_or(SchedulingError::InvalidWorkshop {
                    workshop_id: id,
                    dealership_id,
                })?;
            Ok(workshop.id)
        }
        None => {
            let main = store
                .main_workshop(dealership_id)
                .await?
                .ok_or(SchedulingError::MainWorkshopNotFound(dealership_id))?;
            Ok(main.id)
        }
    }
}

/// Scheduling settings for a workshop. A missing configuration row is not an
/// error; defaults apply.
pub async fn workshop_settings(
    store: &dyn SchedulingStore,
    workshop_id: Uuid,
) -> Result<ScheduleSettings, SchedulingError> {
    let config = store.workshop_configuration(workshop_id).await?;
    Ok(match config {
        Some(row) => ScheduleSettings {
            // A zero or negative duration row would make slot enumeration
            // diverge; fall back to the default instead.
            slot_duration: u16::try_from(row.shift_duration)
                .ok()
                .filter(|d| *d > 0)
                .unwrap_or(DEFAULT_SLOT_DURATION),
            timezone: row.timezone,
        },
        None => ScheduleSettings::default(),
    })
}
