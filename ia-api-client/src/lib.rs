//! Typed async client for the Information Assistant backend.
//!
//! The crate provides:
//! - [`ApiClient`] with one method per backend endpoint (ask, chat, upload
//!   status, status log, citations, tags, app metadata)
//! - request/response records in [`models`]
//! - [`get_citation_file_path`] for turning citation ids into path segments
//!
//! Every call is a single round trip. Failures (non-success status, an
//! `error` field in the body, transport or decoding problems) come back as
//! [`ApiClientError`].

pub mod config;
pub mod endpoints;
pub mod error_handler;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::client_config::ApiClientConfig;
pub use endpoints::Endpoint;
pub use error_handler::{ApiClientError, ConfigError, Result, UNKNOWN_ERROR};
pub use models::ask::{
    Approach, AskOverrides, AskRequest, AskResponse, ChatRequest, ChatTurn, CitationLookupEntry,
    Overrides,
};
pub use models::metadata::{
    ActiveCitation, ApplicationTitle, GetInfoResponse, GetTagsResponse, GetWarningBanner,
};
pub use models::status_log::{
    StatusLogClassification, StatusLogEntry, StatusLogResponse, StatusLogState,
};
pub use models::upload::{
    AllFilesUploadStatus, BlobClientUrlResponse, FileState, FileUploadBasicStatus,
    GetUploadStatusRequest,
};
pub use services::api_client::ApiClient;
pub use services::citation_path::get_citation_file_path;
pub use services::response_shaping::{wrap_tags, wrap_upload_statuses};
