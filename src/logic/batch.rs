use futures::future::try_join_all;
use std::collections::BTreeMap;

use crate::logic::filter_by_category;
use crate::model::{BatchRequest, BatchResult};
use crate::upstream::{AnnotationSource, UpstreamError};

/// Fetch annotations for every identifier in `request` and assemble the
/// per-identifier result map.
///
/// All fetches are started together and polled concurrently on the calling
/// task; the call returns once every fetch has finished. The batch is
/// all-or-nothing: the first `UpstreamError` aborts the remaining fetches
/// and is returned as-is, with no partial result.
///
/// Duplicate identifiers are fetched independently and share one key; the
/// entry for the last occurrence in `ids` is kept.
pub async fn map_go_terms<S>(
    source: &S,
    request: &BatchRequest,
) -> Result<BatchResult, UpstreamError>
where
    S: AnnotationSource + ?Sized,
{
    log::info!(
        "Mapping GO terms for {} identifier(s), category: {}",
        request.ids.len(),
        request.category.as_deref().unwrap_or("none")
    );

    let category = request.category.as_deref();
    let fetches = request.ids.iter().map(|id| async move {
        log::debug!("Fetching annotations for {}", id);
        let annotations = source.fetch_annotations(id).await.map_err(|e| {
            log::warn!("Fetch failed for {}: {}", id, e);
            e
        })?;

        let annotations = match category {
            Some(code) => filter_by_category(annotations, code),
            None => annotations,
        };
        Ok::<_, UpstreamError>((id.clone(), annotations))
    });

    let fetched = try_join_all(fetches).await?;

    let mut results = BTreeMap::new();
    for (id, annotations) in fetched {
        results.insert(id, annotations);
    }

    log::info!("Mapped GO terms for {} distinct identifier(s)", results.len());
    Ok(BatchResult::new(results))
}
