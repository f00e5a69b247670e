use axum::{routing::get, Router};

use crate::api::{handlers, SharedState};
use crate::upstream::AnnotationSource;

pub fn create_router<S: AnnotationSource + 'static>() -> Router<SharedState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Tool description and the mapping tool itself
        .route(
            "/",
            get(handlers::describe_service::<S>).post(handlers::map_terms::<S>),
        )
}
