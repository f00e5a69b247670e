use crate::model::Annotation;
use crate::upstream::UpstreamError;

/// Something that can list the GO annotations of one gene product.
#[async_trait::async_trait]
pub trait AnnotationSource: Send + Sync {
    /// Fetch every annotation for `id` (a bare accession such as `P12345`),
    /// in the order the source returns them.
    async fn fetch_annotations(&self, id: &str) -> Result<Vec<Annotation>, UpstreamError>;
}
