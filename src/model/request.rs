use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Annotation;

pub const REQUEST_SCHEMA: &str = "urn:sd:schema.gene-ontology-term-mapper.request.1";
pub const RESULT_SCHEMA: &str = "urn:sd:schema.gene-ontology-term-mapper.1";

fn request_schema() -> String {
    REQUEST_SCHEMA.to_string()
}

fn result_schema() -> String {
    RESULT_SCHEMA.to_string()
}

/// Input of the mapping tool.
///
/// `ids` keeps the caller's order and may contain duplicates. `category` is
/// kept as the raw code: anything other than `BP`, `MF` or `CC` means
/// "no filter" rather than a rejected request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(rename = "$schema", default = "request_schema")]
    pub schema: String,
    /// UniProt accessions, without the `UniProtKB:` prefix
    pub ids: Vec<String>,
    /// GO category code: BP, MF or CC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl BatchRequest {
    pub fn new(ids: Vec<String>, category: Option<String>) -> Self {
        Self {
            schema: request_schema(),
            ids,
            category,
        }
    }

    pub fn has_current_schema(&self) -> bool {
        self.schema == REQUEST_SCHEMA
    }

    pub fn example() -> Self {
        Self::new(
            vec!["P12345".to_string(), "Q9H0H5".to_string()],
            Some("BP".to_string()),
        )
    }
}

/// Output of the mapping tool: one entry per distinct requested identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    #[serde(rename = "$schema", default = "result_schema")]
    pub schema: String,
    /// Annotations for every requested UniProt ID
    pub results: BTreeMap<String, Vec<Annotation>>,
}

impl BatchResult {
    pub fn new(results: BTreeMap<String, Vec<Annotation>>) -> Self {
        Self {
            schema: result_schema(),
            results,
        }
    }

    pub fn example() -> Self {
        let annotation = Annotation {
            id: Some("UniProtKB:P12345!296618610".to_string()),
            gene_product_id: Some("UniProtKB:P12345".to_string()),
            qualifier: Some("involved_in".to_string()),
            go_id: Some("GO:0006103".to_string()),
            go_aspect: Some("biological_process".to_string()),
            go_evidence: Some("ISS".to_string()),
            assigned_by: Some("UniProt".to_string()),
            symbol: Some("GOT2".to_string()),
            reference: Some("GO_REF:0000024".to_string()),
            ..Annotation::default()
        };

        let mut results = BTreeMap::new();
        results.insert("P12345".to_string(), vec![annotation]);
        Self::new(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_schema_defaults_when_absent() {
        let request: BatchRequest = serde_json::from_str(r#"{"ids": ["P12345"]}"#).unwrap();
        assert_eq!(request.schema, REQUEST_SCHEMA);
        assert!(request.has_current_schema());
        assert_eq!(request.category, None);
    }

    #[test]
    fn test_request_keeps_unknown_category_code() {
        let json = r#"{
            "$schema": "urn:sd:schema.gene-ontology-term-mapper.request.1",
            "ids": ["P12345", "P12345", "Q9H0H5"],
            "category": "XX"
        }"#;
        let request: BatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.ids, vec!["P12345", "P12345", "Q9H0H5"]);
        assert_eq!(request.category.as_deref(), Some("XX"));
    }

    #[test]
    fn test_request_without_ids_is_rejected() {
        assert!(serde_json::from_str::<BatchRequest>(r#"{"category": "MF"}"#).is_err());
        assert!(serde_json::from_str::<BatchRequest>(r#"{"ids": "P12345"}"#).is_err());
    }

    #[test]
    fn test_other_schema_is_flagged() {
        let request: BatchRequest =
            serde_json::from_str(r#"{"$schema": "urn:sd:schema.is-prime.request.1", "ids": []}"#)
                .unwrap();
        assert!(!request.has_current_schema());
    }

    #[test]
    fn test_result_serializes_schema_tag() {
        let value = serde_json::to_value(BatchResult::example()).unwrap();
        assert_eq!(value["$schema"], RESULT_SCHEMA);
        assert_eq!(value["results"]["P12345"][0]["symbol"], "GOT2");
        assert_eq!(value["results"]["P12345"][0]["goName"], serde_json::Value::Null);
    }
}
