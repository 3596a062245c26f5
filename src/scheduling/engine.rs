use std::collections::{HashMap, HashSet};

use sqlx::types::Uuid;

use crate::db::models::{AdvisorSlotAssignment, Appointment, AppointmentStatus};
use crate::scheduling::shift::ShiftClaim;
use crate::scheduling::store::SchedulingStore;
use crate::scheduling::time::{format_date, minutes_of, minutes_to_time, slot_position_minutes};
use crate::scheduling::types::{
    AdvisorSlotStatus, AvailabilityQuery, AvailabilityResponse, SlotDetail, TimeSlot,
};
use crate::scheduling::{resolver, SchedulingError};

const REASON_SHIFT: &str = "shift does not cover required consecutive slots";
const REASON_SERVICE: &str = "not configured for this service at this position";
const REASON_BOOKED: &str = "already booked at this time";

/// Compute the full day's slot grid for a workshop/service/date combination.
///
/// A pure read path: the result is a function of the store's state at call
/// time, nothing is written. A day the workshop does not operate yields an
/// empty grid with an explanatory message, not an error.
pub async fn compute_availability(
    store: &dyn SchedulingStore,
    query: &AvailabilityQuery,
) -> Result<AvailabilityResponse, SchedulingError> {
    let weekday = query.date.weekday().number_from_monday();
    let day_name = crate::scheduling::time::spanish_day_name(query.date.weekday());

    let service = store
        .service_by_id(query.dealership_id, query.service_id)
        .await?
        .ok_or(SchedulingError::ServiceNotFound(query.service_id))?;

    let settings = resolver::workshop_settings(store, query.workshop_id).await?;

    // Independent snapshot reads against the same date; no ordering needed.
    let (hours, assignments, appointments) = tokio::try_join!(
        store.operating_hours(query.workshop_id, weekday),
        store.advisor_assignments(query.workshop_id),
        store.appointments_for_date(query.workshop_id, query.date),
    )?;

    let date_label = format_date(query.date);

    let Some(hours) = hours.filter(|h| h.is_working_day) else {
        tracing::info!(
            dealership_id = %query.dealership_id,
            workshop_id = %query.workshop_id,
            date = %date_label,
            "availability requested for a non-working day"
        );
        return Ok(AvailabilityResponse {
            date: date_label,
            service_id: service.id,
            service_name: service.name,
            slots: Vec::new(),
            message: Some(format!("El taller no opera el día {day_name}")),
        });
    };

    let slot_duration = settings.slot_duration as i32;
    let required_slots = required_slot_count(service.duration_minutes, slot_duration);

    let advisors = group_assignments(&assignments);
    let (booked_counts, booked_advisors) = index_bookings(&appointments);

    let opening = minutes_of(hours.opening_time) as i32;
    let closing = minutes_of(hours.closing_time) as i32;
    let capacity_cap = hours.max_simultaneous_services.max(0);

    let mut slots = Vec::new();
    let mut start = opening;
    // A candidate start is kept only when the service's full span still fits
    // before closing.
    while start + required_slots as i32 * slot_duration <= closing {
        let position = slot_position_minutes(start, opening, slot_duration);
        slots.push(build_slot(
            start,
            position,
            required_slots,
            query.service_id,
            &advisors,
            capacity_cap,
            &booked_counts,
            &booked_advisors,
        ));
        start += slot_duration;
    }

    Ok(AvailabilityResponse {
        date: date_label,
        service_id: service.id,
        service_name: service.name,
        slots,
        message: None,
    })
}

/// How many consecutive slot positions a service occupies.
fn required_slot_count(duration_minutes: i32, slot_duration: i32) -> u32 {
    let duration = duration_minutes.max(1);
    ((duration + slot_duration - 1) / slot_duration).max(1) as u32
}

struct AdvisorConfig {
    id: Uuid,
    name: String,
    claim: Option<ShiftClaim>,
    services_at: HashSet<(i32, Uuid)>,
}

/// Collapse assignment rows into per-advisor configuration, preserving the
/// repository's ordering so output is deterministic.
fn group_assignments(assignments: &[AdvisorSlotAssignment]) -> Vec<AdvisorConfig> {
    let mut order: Vec<Uuid> = Vec::new();
    let mut names: HashMap<Uuid, &str> = HashMap::new();
    let mut positions: HashMap<Uuid, Vec<i32>> = HashMap::new();
    let mut services_at: HashMap<Uuid, HashSet<(i32, Uuid)>> = HashMap::new();

    for row in assignments {
        if !names.contains_key(&row.advisor_id) {
            order.push(row.advisor_id);
            names.insert(row.advisor_id, row.advisor_name.as_str());
        }
        positions
            .entry(row.advisor_id)
            .or_default()
            .push(row.slot_position);
        services_at
            .entry(row.advisor_id)
            .or_default()
            .insert((row.slot_position, row.service_id));
    }

    order
        .into_iter()
        .map(|id| AdvisorConfig {
            id,
            name: names[&id].to_string(),
            claim: ShiftClaim::from_positions(&positions[&id]),
            services_at: services_at.remove(&id).unwrap_or_default(),
        })
        .collect()
}

/// Index non-cancelled bookings by their start minute.
fn index_bookings(
    appointments: &[Appointment],
) -> (HashMap<i32, i32>, HashMap<i32, HashSet<Uuid>>) {
    let mut counts: HashMap<i32, i32> = HashMap::new();
    let mut advisors: HashMap<i32, HashSet<Uuid>> = HashMap::new();

    for appointment in appointments {
        if appointment.status == AppointmentStatus::Cancelled {
            continue;
        }
        let minute = minutes_of(appointment.appointment_time) as i32;
        *counts.entry(minute).or_insert(0) += 1;
        if let Some(advisor_id) = appointment.advisor_id {
            advisors.entry(minute).or_default().insert(advisor_id);
        }
    }

    (counts, advisors)
}

#[allow(clippy::too_many_arguments)]
fn build_slot(
    start: i32,
    position: i32,
    required_slots: u32,
    service_id: Uuid,
    advisors: &[AdvisorConfig],
    capacity_cap: i32,
    booked_counts: &HashMap<i32, i32>,
    booked_advisors: &HashMap<i32, HashSet<Uuid>>,
) -> TimeSlot {
    let mut statuses = Vec::with_capacity(advisors.len());
    let mut capable = 0;

    for advisor in advisors {
        let (can_take, reason) = match &advisor.claim {
            Some(claim) if claim.covers(position, required_slots) => {
                if advisor.services_at.contains(&(position, service_id)) {
                    (true, None)
                } else {
                    (false, Some(REASON_SERVICE))
                }
            }
            _ => (false, Some(REASON_SHIFT)),
        };
        if can_take {
            capable += 1;
        }
        statuses.push(AdvisorSlotStatus {
            id: advisor.id,
            name: advisor.name.clone(),
            can_take,
            reason: reason.map(String::from),
        });
    }

    // Workshop-level cap and advisor-level capacity compose as a minimum.
    let total_capacity = capable.min(capacity_cap);

    let booked = booked_counts.get(&start).copied().unwrap_or(0);
    if let Some(ids) = booked_advisors.get(&start) {
        for status in statuses.iter_mut() {
            if status.can_take && ids.contains(&status.id) {
                status.can_take = false;
                status.reason = Some(REASON_BOOKED.to_string());
            }
        }
    }

    let remaining = (total_capacity - booked).max(0);

    TimeSlot {
        time: minutes_to_time(start as u16),
        available: remaining > 0,
        total_capacity,
        details: SlotDetail {
            available_advisors: remaining,
            advisors: statuses,
        },
    }
}
