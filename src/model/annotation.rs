use serde::{Deserialize, Serialize};

/// One gene-ontology annotation as returned by the QuickGO annotation search.
///
/// Every attribute is optional because QuickGO leaves many of them unset
/// (`goName`, `name` and `synonyms` are almost always null). Absent fields are
/// serialized as `null` rather than skipped, and unknown upstream fields are
/// dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Annotation {
    pub id: Option<String>,
    pub gene_product_id: Option<String>,
    pub qualifier: Option<String>,
    pub go_id: Option<String>,
    pub go_aspect: Option<String>,
    pub go_evidence: Option<String>,
    pub go_name: Option<String>,
    pub assigned_by: Option<String>,
    pub symbol: Option<String>,
    pub synonyms: Option<String>,
    pub name: Option<String>,
    pub reference: Option<String>,
}

impl Annotation {
    pub fn is_aspect(&self, aspect: &str) -> bool {
        self.go_aspect.as_deref() == Some(aspect)
    }
}

/// Envelope of a QuickGO search response. Paging metadata is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationPage {
    pub results: Vec<Annotation>,
}
