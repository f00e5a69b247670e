use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::Annotation;
use crate::upstream::{AnnotationSource, UpstreamError};

/// Annotation source backed by a map, for tests and offline runs.
///
/// Identifiers that were never inserted resolve to an empty list. Identifiers
/// marked with [`MemoryAnnotationSource::fail_with_status`] fail the way a
/// non-2xx QuickGO response would.
#[derive(Debug, Default)]
pub struct MemoryAnnotationSource {
    annotations: HashMap<String, Vec<Annotation>>,
    failures: HashMap<String, u16>,
    calls: AtomicUsize,
}

impl MemoryAnnotationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_annotations(mut self, id: &str, annotations: Vec<Annotation>) -> Self {
        self.annotations.insert(id.to_string(), annotations);
        self
    }

    pub fn fail_with_status(mut self, id: &str, status: u16) -> Self {
        self.failures.insert(id.to_string(), status);
        self
    }

    /// Number of fetches served so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AnnotationSource for MemoryAnnotationSource {
    async fn fetch_annotations(&self, id: &str) -> Result<Vec<Annotation>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.failures.get(id) {
            return Err(UpstreamError::Status {
                id: id.to_string(),
                status: *status,
            });
        }

        Ok(self.annotations.get(id).cloned().unwrap_or_default())
    }
}
