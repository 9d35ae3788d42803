//! Status/error evaluation and payload re-shaping for backend responses.
//!
//! Bodies are first parsed into an untyped [`Value`]; the functions here
//! decide success and validate the value into the record callers expect.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoints::Endpoint;
use crate::error_handler::{ApiClientError, Result};
use crate::models::metadata::GetTagsResponse;
use crate::models::status_log::StatusLogResponse;
use crate::models::upload::{AllFilesUploadStatus, FileUploadBasicStatus};

/// Text of the body's `error` field, if any. Non-string values are rendered as JSON.
pub fn error_text(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Decides success for a parsed response.
///
/// Fails with [`ApiClientError::RequestFailed`] when the status is above 299
/// or not a success status, or when a success body still reports an `error`.
pub fn check_response(status: StatusCode, body: &Value) -> Result<()> {
    let error = error_text(body);
    if status.as_u16() > 299 || !status.is_success() {
        return Err(ApiClientError::request_failed(error.as_deref()));
    }
    match error {
        Some(message) => Err(ApiClientError::RequestFailed { message }),
        None => Ok(()),
    }
}

/// Validates `body` into `T`.
pub fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|source| ApiClientError::Decode {
        endpoint: endpoint.path(),
        source,
    })
}

/// Wraps the bare status array of `/getalluploadstatus` as `{ statuses }`.
/// Element order and content are kept.
pub fn wrap_upload_statuses(body: Value) -> Result<AllFilesUploadStatus> {
    let statuses: Vec<FileUploadBasicStatus> = decode(Endpoint::GetAllUploadStatus, body)?;
    Ok(AllFilesUploadStatus { statuses })
}

/// Wraps the bare tag string of `/getalltags` as `{ tags }`.
pub fn wrap_tags(body: Value) -> Result<GetTagsResponse> {
    let tags: String = decode(Endpoint::GetAllTags, body)?;
    Ok(GetTagsResponse { tags, error: None })
}

/// Keeps only the numeric acknowledgment of `/logstatus`.
pub fn status_ack(body: Value) -> Result<StatusLogResponse> {
    let parsed: StatusLogResponse = decode(Endpoint::LogStatus, body)?;
    Ok(StatusLogResponse {
        status: parsed.status,
        error: None,
    })
}
