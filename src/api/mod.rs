mod handlers;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::StatusStore;

pub fn create_router(store: StatusStore) -> Router {
    let api = Router::new()
        // Status store
        .route("/roadmap", get(handlers::get_status))
        .route("/roadmap", post(handlers::set_status))
        .route("/roadmap", put(handlers::bulk_set_status))
        // Static catalog, for out-of-process front-ends
        .route("/roadmap/catalog", get(handlers::get_catalog))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
