//! Backend endpoint table.
//!
//! Every client operation resolves its path and HTTP method here, so this
//! enum is the one place the wire contract lives.

use reqwest::Method;

/// One backend endpoint of the Information Assistant API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Ask,
    Chat,
    GetBlobClientUrl,
    GetAllUploadStatus,
    LogStatus,
    GetInfoData,
    GetWarningBanner,
    GetCitation,
    GetApplicationTitle,
    GetAllTags,
}

impl Endpoint {
    /// All endpoints, in table order.
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Ask,
        Endpoint::Chat,
        Endpoint::GetBlobClientUrl,
        Endpoint::GetAllUploadStatus,
        Endpoint::LogStatus,
        Endpoint::GetInfoData,
        Endpoint::GetWarningBanner,
        Endpoint::GetCitation,
        Endpoint::GetApplicationTitle,
        Endpoint::GetAllTags,
    ];

    /// Origin-relative path. Casing is the backend's and must not be normalized.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Ask => "/ask",
            Endpoint::Chat => "/chat",
            Endpoint::GetBlobClientUrl => "/getblobclienturl",
            Endpoint::GetAllUploadStatus => "/getalluploadstatus",
            Endpoint::LogStatus => "/logstatus",
            Endpoint::GetInfoData => "/getInfoData",
            Endpoint::GetWarningBanner => "/getWarningBanner",
            Endpoint::GetCitation => "/getcitation",
            Endpoint::GetApplicationTitle => "/getApplicationTitle",
            Endpoint::GetAllTags => "/getalltags",
        }
    }

    /// GET for pure reads, POST for everything that carries a body.
    pub fn method(self) -> Method {
        if self.has_body() { Method::POST } else { Method::GET }
    }

    /// Whether the request carries a JSON body.
    pub const fn has_body(self) -> bool {
        matches!(
            self,
            Endpoint::Ask
                | Endpoint::Chat
                | Endpoint::GetAllUploadStatus
                | Endpoint::LogStatus
                | Endpoint::GetCitation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_get_and_writes_are_post() {
        let gets: Vec<_> = Endpoint::ALL
            .iter()
            .filter(|e| e.method() == Method::GET)
            .map(|e| e.path())
            .collect();
        assert_eq!(
            gets,
            [
                "/getblobclienturl",
                "/getInfoData",
                "/getWarningBanner",
                "/getApplicationTitle",
                "/getalltags"
            ]
        );
        assert_eq!(Endpoint::GetCitation.method(), Method::POST);
        assert_eq!(Endpoint::GetAllUploadStatus.method(), Method::POST);
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }
}
