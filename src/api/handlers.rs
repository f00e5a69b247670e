use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    Json as RequestJson,
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::ApiError;
use crate::logic::map_go_terms;
use crate::model::{BatchRequest, BatchResult, ServiceDescription, REQUEST_SCHEMA};
use crate::upstream::AnnotationSource;

/// Shared per-process state: the annotation source and the tool metadata
/// served on `GET /`.
#[derive(Debug)]
pub struct AppState<S> {
    pub source: S,
    pub service: ServiceDescription,
}

impl<S> AppState<S> {
    pub fn new(source: S, service: ServiceDescription) -> Self {
        Self { source, service }
    }
}

pub type SharedState<S> = Arc<AppState<S>>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn describe_service<S: AnnotationSource>(
    State(state): State<SharedState<S>>,
) -> Json<ServiceDescription> {
    Json(state.service.clone())
}

/// `POST /`: map a batch of UniProt IDs to their GO annotations.
pub async fn map_terms<S: AnnotationSource>(
    State(state): State<SharedState<S>>,
    payload: Result<RequestJson<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResult>, ApiError> {
    let RequestJson(request) = payload?;

    if !request.has_current_schema() {
        return Err(ApiError::Validation(format!(
            "unsupported $schema '{}', expected '{}'",
            request.schema, REQUEST_SCHEMA
        )));
    }

    let result = map_go_terms(&state.source, &request).await?;
    Ok(Json(result))
}
