use axum::{
    routing::{post, put},
    Router,
};

use super::handlers::{create_reminder, list_pending_reminders, update_reminder_status};
use crate::app_state::AppState;

pub fn reminder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/reminders",
            post(create_reminder).get(list_pending_reminders),
        )
        .route("/api/reminders/:id/status", put(update_reminder_status))
}
