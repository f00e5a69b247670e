use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::model::{BatchRequest, BatchResult};

pub const TOOL_DESCRIPTION: &str = "\
Maps a set of protein or gene identifiers (typically UniProt IDs) to their \
corresponding Gene Ontology (GO) annotations using the QuickGO REST API. \
Results can be filtered by GO category: Biological Process (BP), Molecular \
Function (MF) or Cellular Component (CC). Typical uses are enriching gene or \
protein datasets with functional annotations, supporting exploration and \
hypothesis generation, and feeding downstream network construction.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

/// What `GET /` reports about the tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescription {
    pub name: String,
    pub version: String,
    pub description: String,
    pub contact: Contact,
    pub tags: Vec<String>,
    pub request_example: BatchRequest,
    pub result_example: BatchResult,
}

impl ServiceDescription {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            name: config.name.clone(),
            version: config.version.clone(),
            description: TOOL_DESCRIPTION.to_string(),
            contact: Contact {
                name: config.contact_name.clone(),
                email: config.contact_email.clone(),
            },
            tags: vec!["GO Term Mapper".to_string()],
            request_example: BatchRequest::example(),
            result_example: BatchResult::example(),
        }
    }
}
