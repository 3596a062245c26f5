use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::{
    app_state::AppState,
    middleware::tracing::observability_middleware,
    modules::{
        appointments::routes::appointment_routes, availability::routes::availability_routes,
        clients::routes::client_routes, nps::routes::nps_routes,
        reminders::routes::reminder_routes, vehicles::routes::vehicle_routes,
    },
    scheduling::store::PgSchedulingStore,
};

pub fn create_router(state: AppState) -> Router {
    // The availability endpoint only ever reads, so it runs against the
    // store trait rather than the pool directly.
    let store = Arc::new(PgSchedulingStore::new(state.db.clone()));

    let crm_app = Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .merge(client_routes())
        .merge(vehicle_routes())
        .merge(appointment_routes())
        .merge(reminder_routes())
        .merge(nps_routes())
        .with_state(state);

    crm_app
        .merge(availability_routes(store))
        .layer(middleware::from_fn(observability_middleware))
        .layer(CorsLayer::permissive())
}

async fn hello() -> &'static str {
    "Taller Backend says hello!\n"
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let db_result = sqlx::query("SELECT 1").execute(&state.db).await;

    let db_status = match db_result {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::info!("Database health check failed: {}", e);
            "unhealthy"
        }
    };

    Json(json!({
        "status": "ok",
        "timestamp": time::OffsetDateTime::now_utc().to_string(),
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "database": db_status,
        }
    }))
}
