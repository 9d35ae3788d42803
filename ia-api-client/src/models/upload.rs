//! Blob upload URL and per-file ingestion status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Response of `/getblobclienturl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobClientUrlResponse {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// File state filter. Values must match the status log on the ingestion side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileState {
    All,
    Processing,
    Skipped,
    Queued,
    Complete,
    Error,
}

impl FileState {
    pub const fn as_str(self) -> &'static str {
        match self {
            FileState::All => "ALL",
            FileState::Processing => "PROCESSING",
            FileState::Skipped => "SKIPPED",
            FileState::Queued => "QUEUED",
            FileState::Complete => "COMPLETE",
            FileState::Error => "ERROR",
        }
    }

    /// Case-insensitive lookup by wire name.
    pub fn parse(s: &str) -> Option<Self> {
        [
            FileState::All,
            FileState::Processing,
            FileState::Skipped,
            FileState::Queued,
            FileState::Complete,
            FileState::Error,
        ]
        .into_iter()
        .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `/getalluploadstatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUploadStatusRequest {
    /// Look-back window in hours.
    pub timeframe: u32,
    pub state: FileState,
}

/// Ingestion status of one uploaded file.
///
/// `state` is kept as text: the status log may report states this client
/// does not model (e.g. `THROTTLED`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUploadBasicStatus {
    pub id: String,
    pub file_path: String,
    pub file_name: String,
    pub state: String,
    pub start_timestamp: String,
    pub state_description: String,
    pub state_timestamp: String,
}

/// Statuses wrapped from the bare array the backend returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllFilesUploadStatus {
    pub statuses: Vec<FileUploadBasicStatus>,
}
