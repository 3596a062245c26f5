use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_vehicle, get_vehicle, list_vehicles, update_vehicle};
use crate::app_state::AppState;

pub fn vehicle_routes() -> Router<AppState> {
    Router::new()
        .route("/api/vehicles", post(create_vehicle).get(list_vehicles))
        .route("/api/vehicles/:id", get(get_vehicle).put(update_vehicle))
}
