use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{nps_summary, record_nps_response};
use crate::app_state::AppState;

pub fn nps_routes() -> Router<AppState> {
    Router::new()
        .route("/api/nps", post(record_nps_response))
        .route("/api/nps/summary", get(nps_summary))
}
