//! Shared fixtures: an in-memory `SchedulingStore` and router/body helpers.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use time::macros::datetime;
use time::{Date, OffsetDateTime, Time};
use tower::ServiceExt;
use uuid::Uuid;

use taller_backend::db::models::{
    AdvisorSlotAssignment, Appointment, AppointmentStatus, OperatingHours, Service, Workshop,
    WorkshopConfiguration,
};
use taller_backend::db::DatabaseError;
use taller_backend::modules::availability::routes::availability_routes;
use taller_backend::scheduling::store::SchedulingStore;
use taller_backend::scheduling::time::{parse_clock_time, parse_date};

/// In-memory store. Populate the vectors, hand it to the router or the
/// engine, and every lookup behaves like a consistent read snapshot.
#[derive(Debug, Default, Clone)]
pub struct FakeStore {
    pub workshops: Vec<Workshop>,
    pub configurations: Vec<WorkshopConfiguration>,
    pub hours: Vec<OperatingHours>,
    pub services: Vec<Service>,
    pub assignments: Vec<AdvisorSlotAssignment>,
    pub appointments: Vec<Appointment>,
    /// When set, every read fails, simulating a store outage.
    pub fail_reads: bool,
}

impl FakeStore {
    fn check(&self) -> Result<(), DatabaseError> {
        if self.fail_reads {
            Err(DatabaseError::Unknown("injected read failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SchedulingStore for FakeStore {
    async fn workshop_by_id(
        &self,
        dealership_id: Uuid,
        workshop_id: Uuid,
    ) -> Result<Option<Workshop>, DatabaseError> {
        self.check()?;
        Ok(self
            .workshops
            .iter()
            .find(|w| w.id == workshop_id && w.dealership_id == dealership_id && w.is_active)
            .cloned())
    }

    async fn main_workshop(&self, dealership_id: Uuid) -> Result<Option<Workshop>, DatabaseError> {
        self.check()?;
        Ok(self
            .workshops
            .iter()
            .find(|w| w.dealership_id == dealership_id && w.is_main && w.is_active)
            .cloned())
    }

    async fn workshop_configuration(
        &self,
        workshop_id: Uuid,
    ) -> Result<Option<WorkshopConfiguration>, DatabaseError> {
        self.check()?;
        Ok(self
            .configurations
            .iter()
            .find(|c| c.workshop_id == workshop_id)
            .cloned())
    }

    async fn operating_hours(
        &self,
        workshop_id: Uuid,
        weekday: u8,
    ) -> Result<Option<OperatingHours>, DatabaseError> {
        self.check()?;
        Ok(self
            .hours
            .iter()
            .find(|h| h.workshop_id == workshop_id && h.weekday == weekday as i16)
            .cloned())
    }

    async fn service_by_id(
        &self,
        dealership_id: Uuid,
        service_id: Uuid,
    ) -> Result<Option<Service>, DatabaseError> {
        self.check()?;
        Ok(self
            .services
            .iter()
            .find(|s| s.id == service_id && s.dealership_id == dealership_id && s.is_active)
            .cloned())
    }

    async fn advisor_assignments(
        &self,
        workshop_id: Uuid,
    ) -> Result<Vec<AdvisorSlotAssignment>, DatabaseError> {
        self.check()?;
        // Every fixture advisor belongs to the single fixture workshop.
        let _ = workshop_id;
        Ok(self.assignments.clone())
    }

    async fn appointments_for_date(
        &self,
        workshop_id: Uuid,
        date: Date,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        self.check()?;
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.workshop_id == workshop_id && a.appointment_date == date)
            .cloned()
            .collect())
    }
}

pub fn fixed_timestamp() -> OffsetDateTime {
    datetime!(2025-01-01 00:00:00 UTC)
}

pub fn workshop(dealership_id: Uuid, is_main: bool) -> Workshop {
    Workshop {
        id: Uuid::new_v4(),
        dealership_id,
        name: "Taller Central".to_string(),
        is_main,
        is_active: true,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

pub fn operating_hours(
    workshop_id: Uuid,
    weekday: u8,
    opening: &str,
    closing: &str,
    max_simultaneous: i32,
) -> OperatingHours {
    OperatingHours {
        id: Uuid::new_v4(),
        workshop_id,
        weekday: weekday as i16,
        opening_time: clock(opening),
        closing_time: clock(closing),
        max_simultaneous_services: max_simultaneous,
        is_working_day: true,
    }
}

pub fn service(dealership_id: Uuid, name: &str, duration_minutes: i32) -> Service {
    Service {
        id: Uuid::new_v4(),
        dealership_id,
        name: name.to_string(),
        duration_minutes,
        is_active: true,
    }
}

/// Assignment rows for one advisor: the given positions, all mapped to the
/// given service.
pub fn advisor_assignments(
    advisor_id: Uuid,
    name: &str,
    positions: &[i32],
    service_id: Uuid,
) -> Vec<AdvisorSlotAssignment> {
    positions
        .iter()
        .map(|&slot_position| AdvisorSlotAssignment {
            advisor_id,
            advisor_name: name.to_string(),
            slot_position,
            service_id,
        })
        .collect()
}

pub fn booking(
    dealership_id: Uuid,
    workshop_id: Uuid,
    service_id: Uuid,
    advisor_id: Option<Uuid>,
    date: &str,
    time: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        dealership_id,
        workshop_id,
        client_id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        service_id,
        advisor_id,
        appointment_date: date_of(date),
        appointment_time: clock(time),
        status,
        notes: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

pub fn date_of(value: &str) -> Date {
    parse_date(value).expect("fixture date")
}

pub fn clock(value: &str) -> Time {
    parse_clock_time(value).expect("fixture time")
}

pub fn build_router(store: FakeStore) -> Router {
    availability_routes(Arc::new(store))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes()
        .to_vec()
}
