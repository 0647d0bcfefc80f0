use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single collection record. Its shape is owned by the collection store.
pub type Record = Map<String, Value>;

/// Every record of a collection, in store order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadResult {
    pub items: Vec<Record>,
}

/// Payload accepted by the upload endpoint.
///
/// Both fields are required, but their absence is reported through
/// [`UploadResult`] rather than rejected while extracting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_content: Option<String>,
}

#[cfg(test)]
impl UploadRequest {
    pub fn new(file_name: impl Into<String>, file_content: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            file_content: Some(file_content.into()),
        }
    }
}

/// Outcome of one upload; exactly one of `file_url` and `error` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResult {
    pub fn stored(file_url: impl Into<String>) -> Self {
        Self {
            success: true,
            file_url: Some(file_url.into()),
            error: None,
        }
    }

    pub fn failed(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            file_url: None,
            error: Some(error.to_string()),
        }
    }
}

/// Knowledge-base entry pushed into the collection store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntryRequest {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntryResponse {
    pub item: Record,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_upload_result_success_shape() {
        let result = UploadResult::stored("https://store/x.json");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": true, "fileUrl": "https://store/x.json" })
        );
    }

    #[test]
    fn test_upload_result_failure_shape() {
        let result = UploadResult::failed("bucket unavailable");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": false, "error": "bucket unavailable" })
        );
    }

    #[test]
    fn test_upload_request_tolerates_missing_fields() {
        let request: UploadRequest = serde_json::from_value(json!({ "fileName": "x.json" })).unwrap();
        assert_eq!(request.file_name.as_deref(), Some("x.json"));
        assert!(request.file_content.is_none());
    }
}
