use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use go_term_mapper::config::{AppConfig, UpstreamConfig};
use go_term_mapper::{build_app, AnnotationSource, QuickGoClient, UpstreamError};
use parking_lot::Mutex;
use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

const SEARCH_PATH: &str = "/QuickGO/services/annotation/search";

/// Stand-in for the QuickGO annotation search, keyed on `geneProductId`.
#[derive(Default)]
struct StubQuickGo {
    queries: Mutex<Vec<HashMap<String, String>>>,
}

fn record(id: &str, go_id: &str, aspect: &str) -> Value {
    json!({
        "id": format!("{}!{}", id, go_id),
        "geneProductId": id,
        "qualifier": "enables",
        "goId": go_id,
        "goAspect": aspect,
        "goEvidence": "IEA",
        "goName": null,
        "evidenceCode": "ECO:0000501",
        "assignedBy": "InterPro",
        "symbol": "GOT2",
        "reference": "GO_REF:0000002",
        "withFrom": [{"connectedXrefs": [{"db": "InterPro", "id": "IPR004839"}]}]
    })
}

async fn search(
    State(stub): State<Arc<StubQuickGo>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let product = params.get("geneProductId").cloned().unwrap_or_default();
    stub.queries.lock().push(params);

    match product.as_str() {
        "UniProtKB:P12345" => Json(json!({
            "numberOfHits": 3,
            "results": [
                record(&product, "GO:0004069", "molecular_function"),
                record(&product, "GO:0030170", "molecular_function"),
                record(&product, "GO:0006103", "biological_process"),
            ],
            "pageInfo": {"resultsPerPage": 100, "current": 1, "total": 1}
        }))
        .into_response(),
        "UniProtKB:A" => Json(json!({
            "numberOfHits": 1,
            "results": [record(&product, "GO:0005739", "cellular_component")]
        }))
        .into_response(),
        "UniProtKB:BROKEN" => {
            (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
        }
        "UniProtKB:GARBLED" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "UniProtKB:NORESULTS" => Json(json!({"numberOfHits": 0})).into_response(),
        _ => Json(json!({"numberOfHits": 0, "results": []})).into_response(),
    }
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_upstream() -> (Arc<StubQuickGo>, UpstreamConfig) {
    let stub = Arc::new(StubQuickGo::default());
    let app = Router::new()
        .route(SEARCH_PATH, get(search))
        .with_state(stub.clone());
    let base = spawn(app).await;

    let config = UpstreamConfig {
        base_url: format!("{}{}", base, SEARCH_PATH),
        ..UpstreamConfig::default()
    };
    (stub, config)
}

// Test client wrapper for making API calls
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    async fn start() -> (Self, Arc<StubQuickGo>) {
        let (stub, upstream) = spawn_upstream().await;
        let config = AppConfig {
            upstream,
            ..AppConfig::default()
        };
        let base_url = spawn(build_app(&config)).await;

        let client = Self {
            client: Client::new(),
            base_url,
        };
        (client, stub)
    }

    async fn post(&self, json: Value) -> (u16, Value) {
        let response = self
            .client
            .post(format!("{}/", self.base_url))
            .json(&json)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}

fn go_ids(annotations: &Value) -> Vec<&str> {
    annotations
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["goId"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_category_scenario() {
    let (client, _) = TestClient::start().await;

    let (status, body) = client
        .post(json!({
            "$schema": "urn:sd:schema.gene-ontology-term-mapper.request.1",
            "ids": ["P12345"],
            "category": "MF"
        }))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["$schema"], "urn:sd:schema.gene-ontology-term-mapper.1");
    assert_eq!(body["results"].as_object().unwrap().len(), 1);
    assert_eq!(
        go_ids(&body["results"]["P12345"]),
        vec!["GO:0004069", "GO:0030170"]
    );

    let first = body["results"]["P12345"][0].as_object().unwrap();
    assert_eq!(first.len(), 12);
    assert!(first.get("withFrom").is_none());
    assert_eq!(first["goName"], Value::Null);
    assert_eq!(first["synonyms"], Value::Null);
}

#[tokio::test]
async fn test_empty_identifier_scenario() {
    let (client, _) = TestClient::start().await;

    let (status, body) = client.post(json!({"ids": ["A", "B"]})).await;

    assert_eq!(status, 200);
    assert_eq!(go_ids(&body["results"]["A"]), vec!["GO:0005739"]);
    assert_eq!(body["results"]["B"], json!([]));
}

#[tokio::test]
async fn test_duplicate_identifier_scenario() {
    let (client, stub) = TestClient::start().await;

    let (status, body) = client.post(json!({"ids": ["A", "A"]})).await;

    assert_eq!(status, 200);
    let results = body["results"].as_object().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(go_ids(&results["A"]), vec!["GO:0005739"]);
    assert_eq!(stub.queries.lock().len(), 2);
}

#[tokio::test]
async fn test_upstream_query_parameters() {
    let (client, stub) = TestClient::start().await;

    let (status, _) = client.post(json!({"ids": ["P12345"]})).await;
    assert_eq!(status, 200);

    let queries = stub.queries.lock();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0]["geneProductId"], "UniProtKB:P12345");
    assert_eq!(queries[0]["limit"], "100");
}

#[tokio::test]
async fn test_one_failure_fails_the_batch() {
    let (client, _) = TestClient::start().await;

    for bad in ["BROKEN", "GARBLED", "NORESULTS"] {
        let (status, body) = client.post(json!({"ids": ["P12345", bad, "A"]})).await;

        assert_eq!(status, 502, "{}", bad);
        assert!(body.get("results").is_none());
        assert!(body["error"].as_str().unwrap().contains(bad));
    }
}

#[tokio::test]
async fn test_missing_ids_never_reaches_upstream() {
    let (client, stub) = TestClient::start().await;

    let (status, body) = client.post(json!({"category": "BP"})).await;

    assert_eq!(status, 422);
    assert!(body["error"].is_string());
    assert!(stub.queries.lock().is_empty());
}

#[tokio::test]
async fn test_client_preserves_upstream_order() {
    let (_, config) = spawn_upstream().await;
    let client = QuickGoClient::new(config);

    let annotations = client.fetch_annotations("P12345").await.unwrap();
    let ids: Vec<_> = annotations.iter().filter_map(|a| a.go_id.as_deref()).collect();
    assert_eq!(ids, vec!["GO:0004069", "GO:0030170", "GO:0006103"]);
    assert_eq!(annotations[0].assigned_by.as_deref(), Some("InterPro"));
}

#[tokio::test]
async fn test_client_error_variants() {
    let (_, config) = spawn_upstream().await;
    let client = QuickGoClient::new(config);

    let err = client.fetch_annotations("BROKEN").await.unwrap_err();
    assert!(matches!(err, UpstreamError::Status { status: 500, .. }), "{:?}", err);

    let err = client.fetch_annotations("GARBLED").await.unwrap_err();
    assert!(matches!(err, UpstreamError::Decode { .. }), "{:?}", err);

    let err = client.fetch_annotations("NORESULTS").await.unwrap_err();
    assert!(matches!(err, UpstreamError::Decode { .. }), "{:?}", err);
    assert_eq!(err.id(), "NORESULTS");
}
