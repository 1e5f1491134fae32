//! Authenticated request building and the shared response pipeline.
//!
//! # Design
//! Every resource operation is split into a `build_*` method that produces an
//! `HttpRequest` and a calling method that runs it through `send` or
//! `send_empty`. Those two are the only places a response is interpreted:
//!
//! 1. the transport runs the request once and buffers the whole body;
//! 2. the body is probed for `{"error": "..."}` with a non-empty message,
//!    which wins regardless of status code;
//! 3. otherwise the same bytes are decoded from the start into the target.
//!
//! The probe only accepts JSON objects. Arrays, scalars and non-JSON bodies
//! fall through to the targeted decode, which is the only step allowed to
//! fail with `ClientError::Decode`.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};

pub(crate) const DEVELOPER_KEY_HEADER: &str = "x-developer-key";
const JSON: &str = "application/json";

/// Blocking client for the PocketSmith v2 API.
///
/// Holds the developer key and one shared transport. Cloning is cheap and
/// clones share the transport (and with it, ureq's connection pool).
pub struct PocketSmithClient<T: Transport = UreqTransport> {
    base_url: String,
    developer_key: String,
    transport: Arc<T>,
}

impl PocketSmithClient {
    /// Client for the production API using the given developer key.
    pub fn new(developer_key: &str) -> Self {
        Self::with_config(ClientConfig::new(developer_key))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> PocketSmithClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            developer_key: config.developer_key,
            transport: Arc::new(transport),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build a bodyless request for `path` (relative to the API root).
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpRequest> {
        self.assemble(method, path, query, None)
    }

    /// Build a request whose body is `payload` serialized as JSON.
    pub fn build_json_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        payload: &B,
    ) -> Result<HttpRequest> {
        let body = serde_json::to_string(payload).map_err(ClientError::Serialization)?;
        self.assemble(method, path, query, Some(body))
    }

    fn assemble(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<HttpRequest> {
        let url = format!("{}{path}", self.base_url);
        let uri: ureq::http::Uri = url
            .parse()
            .map_err(|e: ureq::http::uri::InvalidUri| ClientError::InvalidRequest(format!("{url}: {e}")))?;
        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(ClientError::InvalidRequest(format!("{url}: not an absolute URL")));
        }

        let mut headers = vec![
            ("accept".to_string(), JSON.to_string()),
            (DEVELOPER_KEY_HEADER.to_string(), self.developer_key.clone()),
        ];
        if body.is_some() {
            headers.push(("content-type".to_string(), JSON.to_string()));
        }

        Ok(HttpRequest {
            method,
            url,
            query,
            headers,
            body,
        })
    }

    /// Run `request` and decode the response into `R`.
    pub fn send<R: DeserializeOwned>(&self, request: &HttpRequest) -> Result<R> {
        let response = self.dispatch(request)?;
        parse_response(&response)
    }

    /// Run `request` when only success or failure matters.
    pub fn send_empty(&self, request: &HttpRequest) -> Result<()> {
        let response = self.dispatch(request)?;
        parse_empty_response(&response)
    }

    fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );
        Ok(response)
    }
}

impl<T: Transport> Clone for PocketSmithClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            developer_key: self.developer_key.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> fmt::Debug for PocketSmithClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PocketSmithClient")
            .field("base_url", &self.base_url)
            .field("developer_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Interpret `body` as an API error, if it is one.
///
/// Only a JSON object whose `error` member is a non-empty string counts.
pub fn probe_api_error(body: &[u8]) -> Option<ApiError> {
    let mut object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body).ok()?;
    match object.remove("error") {
        Some(serde_json::Value::String(error)) if !error.is_empty() => Some(ApiError { error }),
        _ => None,
    }
}

/// Resolve a buffered response into `R` or an error.
pub fn parse_response<R: DeserializeOwned>(response: &HttpResponse) -> Result<R> {
    if let Some(err) = probe_api_error(&response.body) {
        return Err(err.into());
    }
    serde_json::from_slice(&response.body).map_err(ClientError::Decode)
}

/// Resolve a buffered response for an operation with no meaningful body.
pub fn parse_empty_response(response: &HttpResponse) -> Result<()> {
    match probe_api_error(&response.body) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
