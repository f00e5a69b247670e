pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod upstream;

// Export API types
pub use api::handlers;
pub use api::routes;

pub use logic::{filter_by_category, map_go_terms};

// Export all model types
pub use model::*;

pub use upstream::{AnnotationSource, MemoryAnnotationSource, QuickGoClient, UpstreamError};

use std::sync::Arc;

use crate::api::AppState;
use crate::config::AppConfig;

/// Build the service router backed by QuickGO, as configured.
pub fn build_app(config: &AppConfig) -> axum::Router {
    let source = QuickGoClient::new(config.upstream.clone());
    let service = ServiceDescription::from_config(&config.service);

    api::routes::create_router::<QuickGoClient>()
        .with_state(Arc::new(AppState::new(source, service)))
}
