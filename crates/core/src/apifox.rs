//! Apifox Open API client: exports a project's OpenAPI document.

use std::time::Duration;

use a2i_common::A2iConfig;
use reqwest::StatusCode;
use tracing::{debug, info, warn};
use url::Url;

/// Request timeout used by [`ApifoxClient::new`].
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Header carrying the Apifox Open API version.
const API_VERSION_HEADER: &str = "X-Apifox-Api-Version";

/// Locale requested for exported descriptions.
const EXPORT_LOCALE: &str = "zh-CN";

/// Errors raised while exporting the OpenAPI document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid Apifox host {host:?}: {source}")]
    InvalidHost {
        host: String,
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Apifox export request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Apifox export failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client for the `export-openapi` endpoint of one project.
#[derive(Debug)]
pub struct ApifoxClient {
    http: reqwest::Client,
    endpoint: Url,
    config: A2iConfig,
}

impl ApifoxClient {
    /// Build a client with the default 60 second timeout.
    pub fn new(config: &A2iConfig) -> Result<Self, FetchError> {
        Self::with_timeout(config, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(config: &A2iConfig, timeout: Duration) -> Result<Self, FetchError> {
        let endpoint = export_endpoint(&config.apifox_host, &config.project_id)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| {
                warn!(error = %err, "Failed to build Apifox HTTP client.");
                FetchError::Client(err)
            })?;

        Ok(Self {
            http,
            endpoint,
            config: config.clone(),
        })
    }

    /// Full URL of the export endpoint, including the locale query.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the configured export request and return the raw response text.
    pub async fn export_openapi(&self) -> Result<String, FetchError> {
        debug!(url = %self.endpoint, "Sending Apifox export request.");
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(API_VERSION_HEADER, &self.config.version)
            .bearer_auth(&self.config.access_token)
            .json(&self.config.request_body)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, url = %self.endpoint, "Apifox export request failed.");
                FetchError::Request(err)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::Request)?;
        if !status.is_success() {
            warn!(%status, "Apifox export returned an error status.");
            return Err(FetchError::Status { status, body });
        }

        info!(bytes = body.len(), "Fetched OpenAPI document from Apifox.");
        Ok(body)
    }
}

/// `<host>/v1/projects/<id>/export-openapi?locale=zh-CN`
fn export_endpoint(host: &str, project_id: &str) -> Result<Url, FetchError> {
    let raw = format!(
        "{}/v1/projects/{}/export-openapi",
        host.trim_end_matches('/'),
        project_id
    );
    let mut url = Url::parse(&raw).map_err(|source| FetchError::InvalidHost {
        host: host.to_string(),
        source,
    })?;
    url.query_pairs_mut().append_pair("locale", EXPORT_LOCALE);
    Ok(url)
}
