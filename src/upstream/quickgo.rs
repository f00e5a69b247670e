use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::config::UpstreamConfig;
use crate::model::{Annotation, AnnotationPage};
use crate::upstream::{AnnotationSource, UpstreamError};

/// QuickGO annotation search client.
///
/// One `reqwest::Client` is built up front and shared by every fetch, so
/// concurrent fetches reuse its connection pool. The pool outlives a single
/// batch: connections are not acquired per `map_go_terms` call and released
/// when it returns, but kept for the life of the client. The client keeps
/// reqwest's defaults: no request timeout, no retries.
#[derive(Debug, Clone)]
pub struct QuickGoClient {
    client: Client,
    config: UpstreamConfig,
}

impl QuickGoClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Namespaced product id sent as `geneProductId`, e.g. `UniProtKB:P12345`.
    pub fn gene_product_id(&self, id: &str) -> String {
        format!("{}:{}", self.config.namespace, id)
    }
}

#[async_trait::async_trait]
impl AnnotationSource for QuickGoClient {
    async fn fetch_annotations(&self, id: &str) -> Result<Vec<Annotation>, UpstreamError> {
        let limit = self.config.limit.to_string();
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("geneProductId", self.gene_product_id(id).as_str()),
                ("limit", limit.as_str()),
            ])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                id: id.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                id: id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport {
                id: id.to_string(),
                source,
            })?;

        let page: AnnotationPage =
            serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode {
                id: id.to_string(),
                source,
            })?;

        log::debug!("QuickGO returned {} annotations for {}", page.results.len(), id);
        Ok(page.results)
    }
}
