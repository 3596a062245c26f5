use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_client, delete_client, get_client, list_clients, update_client};
use crate::app_state::AppState;

pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/api/clients", post(create_client).get(list_clients))
        .route(
            "/api/clients/:id",
            get(get_client).put(update_client).delete(delete_client),
        )
}
