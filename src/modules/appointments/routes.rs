use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    cancel_appointment, create_appointment, get_appointment, list_appointments,
    update_appointment_status,
};
use crate::app_state::AppState;

pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/appointments",
            post(create_appointment).get(list_appointments),
        )
        .route(
            "/api/appointments/:id",
            get(get_appointment).delete(cancel_appointment),
        )
        .route(
            "/api/appointments/:id/status",
            put(update_appointment_status),
        )
}
