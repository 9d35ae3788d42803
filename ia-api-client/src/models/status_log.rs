use serde::{Deserialize, Serialize};

/// Severity of a status log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusLogClassification {
    Debug,
    Info,
    Error,
}

/// Lifecycle state recorded with a status log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusLogState {
    Processing,
    Skipped,
    Queued,
    Complete,
    Error,
    Throttled,
    Uploaded,
    All,
}

/// One line for `/logstatus`. Serializes to the wire body as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLogEntry {
    pub path: String,
    pub status: String,
    pub status_classification: StatusLogClassification,
    pub state: StatusLogState,
}

/// Acknowledgment from `/logstatus`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLogResponse {
    #[serde(default)]
    pub status: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_wire_shape() {
        let entry = StatusLogEntry {
            path: "upload/report.pdf".into(),
            status: "File uploaded from browser to Azure Blob Storage".into(),
            status_classification: StatusLogClassification::Info,
            state: StatusLogState::Uploaded,
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "path": "upload/report.pdf",
                "status": "File uploaded from browser to Azure Blob Storage",
                "status_classification": "Info",
                "state": "Uploaded"
            })
        );
    }
}
