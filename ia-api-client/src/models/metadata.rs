//! Flat metadata records: deployment info, banner, title, tags, citation.
//!
//! Data fields default when missing, since the backend may send only `error`.

use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// Deployment/model metadata from `/getInfoData`. Wire keys are upper-case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GetInfoResponse {
    pub azure_openai_service: String,
    pub azure_openai_chatgpt_deployment: String,
    pub azure_openai_model_name: String,
    pub azure_openai_model_version: String,
    pub azure_search_service: String,
    pub azure_search_index: String,
    pub target_language: String,
    pub use_azure_openai_embeddings: bool,
    pub embeddings_deployment: String,
    pub embeddings_model_name: String,
    pub embeddings_model_version: String,
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Banner text from `/getWarningBanner`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetWarningBanner {
    #[serde(rename = "WARNING_BANNER_TEXT")]
    pub warning_banner_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Title from `/getApplicationTitle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationTitle {
    #[serde(rename = "APPLICATION_TITLE")]
    pub application_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// All known tags. The backend sends a bare string; see
/// [`wrap_tags`](crate::services::response_shaping::wrap_tags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTagsResponse {
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Indexed chunk behind a citation, from `/getcitation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveCitation {
    pub file_name: String,
    pub file_uri: String,
    pub processed_datetime: String,
    pub title: String,
    pub section: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: Vec<u32>,
    pub token_count: u64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for `/getcitation`.
#[derive(Debug, Serialize)]
pub(crate) struct CitationRequest<'a> {
    pub citation: &'a str,
}
