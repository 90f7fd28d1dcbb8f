use std::future::Future;

use serde_json::Value;
use shared_types::{ApiConfig, Case, ClientError};

use crate::error_convert::{json_to_client_error, ReqwestErrorExt};

/// Source of case records.
///
/// `Ok(None)` means the request succeeded but carried no usable record.
pub trait CaseDataClient {
    fn fetch_case(
        &self,
        case_id: &str,
    ) -> impl Future<Output = Result<Option<Case>, ClientError>>;
}

/// HTTP client for `GET {base_url}/api/casos/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCaseClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCaseClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from the embedded `config.toml`.
    pub fn from_config() -> Self {
        Self::new(&crate::config::client_config().api)
    }

    /// Full URL for one case. The id is encoded as a single path segment.
    pub fn case_url(&self, case_id: &str) -> String {
        format!("{}/api/casos/{}", self.base_url, urlencoding::encode(case_id))
    }
}

impl CaseDataClient for HttpCaseClient {
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_case(&self, case_id: &str) -> Result<Option<Case>, ClientError> {
        let response = self
            .http
            .get(self.case_url(case_id))
            .send()
            .await
            .map_err(|e| e.into_client_error())?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unexpected status"),
            ));
        }

        let body = response.text().await.map_err(|e| e.into_client_error())?;
        parse_case_body(&body)
    }
}

/// Interpret a successful response body.
///
/// Empty bodies, `null` and `{}` carry no record and yield `Ok(None)`.
/// Anything else must deserialize as a [`Case`].
pub fn parse_case_body(body: &str) -> Result<Option<Case>, ClientError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body).map_err(json_to_client_error)?;
    match value {
        Value::Null => Ok(None),
        Value::Object(ref map) if map.is_empty() => Ok(None),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(json_to_client_error),
    }
}
