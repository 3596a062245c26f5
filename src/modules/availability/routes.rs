use axum::{routing::get, Router};

use super::handlers::{advisor_availability, SharedStore};

pub fn availability_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/api/availability/advisors", get(advisor_availability))
        .with_state(store)
}
