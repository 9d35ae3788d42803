//! HTTP client for the Information Assistant backend.
//!
//! One method per endpoint of [`Endpoint`]. Every call makes exactly one
//! round trip:
//! 1. send (GET, or POST with a JSON body), `Content-Type: application/json`
//! 2. parse the body as JSON, before looking at the status
//! 3. fail on status > 299 / non-success, or on a populated `error` field
//! 4. validate into the typed record, re-shaping where the backend sends a bare value
//!
//! No retries, no timeouts, no caching. Errors are normalized via
//! [`ApiClientError`].

use std::time::Instant;

use reqwest::{RequestBuilder, header};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::{
    config::client_config::ApiClientConfig,
    endpoints::Endpoint,
    error_handler::{ApiClientError, Result, make_snippet},
    models::{
        ask::{AskRequest, AskResponse, ChatRequest},
        metadata::{
            ActiveCitation, ApplicationTitle, CitationRequest, GetInfoResponse, GetTagsResponse,
            GetWarningBanner,
        },
        status_log::{StatusLogEntry, StatusLogResponse},
        upload::{AllFilesUploadStatus, BlobClientUrlResponse, GetUploadStatusRequest},
    },
    services::response_shaping::{
        check_response, decode, status_ack, wrap_tags, wrap_upload_statuses,
    },
};

/// Thin async client for the backend API.
///
/// Holds a preconfigured `reqwest::Client` and the backend origin. Cheap to
/// clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    cfg: ApiClientConfig,
}

impl ApiClient {
    /// Creates a client for the given config.
    ///
    /// # Errors
    /// - [`ApiClientError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: ApiClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        info!(base_url = %cfg.base_url, "ApiClient initialized");

        Ok(Self { http, cfg })
    }

    /// Creates a client from `IA_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiClientConfig::from_env()?)
    }

    /// Reuses an existing `reqwest::Client`. The JSON content type is set per request.
    pub fn with_http_client(http: reqwest::Client, cfg: ApiClientConfig) -> Self {
        Self { http, cfg }
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.cfg
    }

    /* ------------------------------------------------------------------ */
    /* Endpoints                                                          */
    /* ------------------------------------------------------------------ */

    /// Asks a single question (`POST /ask`).
    pub async fn ask(&self, req: &AskRequest) -> Result<AskResponse> {
        let body = self.post(Endpoint::Ask, &req.body()).await?;
        decode(Endpoint::Ask, body)
    }

    /// Continues a conversation (`POST /chat`).
    pub async fn chat(&self, req: &ChatRequest) -> Result<AskResponse> {
        let body = self.post(Endpoint::Chat, &req.body()).await?;
        decode(Endpoint::Chat, body)
    }

    /// SAS URL for direct uploads (`GET /getblobclienturl`).
    pub async fn get_blob_client_url(&self) -> Result<String> {
        let body = self.get(Endpoint::GetBlobClientUrl).await?;
        let parsed: BlobClientUrlResponse = decode(Endpoint::GetBlobClientUrl, body)?;
        Ok(parsed.url)
    }

    /// Upload statuses within a timeframe (`POST /getalluploadstatus`).
    pub async fn get_all_upload_status(
        &self,
        req: &GetUploadStatusRequest,
    ) -> Result<AllFilesUploadStatus> {
        let body = self.post(Endpoint::GetAllUploadStatus, req).await?;
        wrap_upload_statuses(body)
    }

    /// Appends a line to the status log (`POST /logstatus`).
    pub async fn log_status(&self, entry: &StatusLogEntry) -> Result<StatusLogResponse> {
        let body = self.post(Endpoint::LogStatus, entry).await?;
        status_ack(body)
    }

    /// Deployment and model metadata (`GET /getInfoData`).
    pub async fn get_info_data(&self) -> Result<GetInfoResponse> {
        let body = self.get(Endpoint::GetInfoData).await?;
        decode(Endpoint::GetInfoData, body)
    }

    /// Warning banner text (`GET /getWarningBanner`).
    pub async fn get_warning_banner(&self) -> Result<GetWarningBanner> {
        let body = self.get(Endpoint::GetWarningBanner).await?;
        decode(Endpoint::GetWarningBanner, body)
    }

    /// Indexed chunk behind a citation (`POST /getcitation`).
    pub async fn get_citation_obj(&self, citation: &str) -> Result<ActiveCitation> {
        let body = self
            .post(Endpoint::GetCitation, &CitationRequest { citation })
            .await?;
        decode(Endpoint::GetCitation, body)
    }

    /// Application title (`GET /getApplicationTitle`).
    pub async fn get_application_title(&self) -> Result<ApplicationTitle> {
        let body = self.get(Endpoint::GetApplicationTitle).await?;
        decode(Endpoint::GetApplicationTitle, body)
    }

    /// All known tags (`GET /getalltags`).
    pub async fn get_all_tags(&self) -> Result<GetTagsResponse> {
        let body = self.get(Endpoint::GetAllTags).await?;
        wrap_tags(body)
    }

    /* ------------------------------------------------------------------ */
    /* Transport                                                          */
    /* ------------------------------------------------------------------ */

    async fn get(&self, endpoint: Endpoint) -> Result<Value> {
        let url = self.cfg.url_for(endpoint.path());
        let rb = self
            .http
            .request(endpoint.method(), &url)
            .header(header::CONTENT_TYPE, "application/json");
        self.execute(endpoint, url, rb).await
    }

    async fn post<B>(&self, endpoint: Endpoint, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.cfg.url_for(endpoint.path());
        let rb = self.http.request(endpoint.method(), &url).json(body);
        self.execute(endpoint, url, rb).await
    }

    async fn execute(&self, endpoint: Endpoint, url: String, rb: RequestBuilder) -> Result<Value> {
        let started = Instant::now();
        debug!(method = %endpoint.method(), %url, "sending request");

        let resp = rb
            .send()
            .await
            .inspect_err(|e| {
                error!(
                    error = %e,
                    %url,
                    latency_ms = started.elapsed().as_millis(),
                    "transport failure"
                );
            })?;

        let status = resp.status();
        let bytes = resp.bytes().await?;

        // Parsed before the status check; a non-JSON error page surfaces as Decode.
        let body: Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(source) => {
                error!(
                    %status,
                    %url,
                    snippet = %make_snippet(&String::from_utf8_lossy(&bytes)),
                    latency_ms = started.elapsed().as_millis(),
                    "response body is not valid JSON"
                );
                return Err(ApiClientError::Decode {
                    endpoint: endpoint.path(),
                    source,
                });
            }
        };

        if let Err(e) = check_response(status, &body) {
            error!(
                %status,
                %url,
                error = %e,
                latency_ms = started.elapsed().as_millis(),
                "backend reported failure"
            );
            return Err(e);
        }

        info!(
            %status,
            path = endpoint.path(),
            latency_ms = started.elapsed().as_millis(),
            "request completed"
        );

        Ok(body)
    }
}
