//! HTTP transport and the 401 refresh-and-replay protocol.

use std::sync::Arc;

use reqwest::Client;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::config::ClientConfig;
use crate::error::{ApiError, RefreshError, Result};
use crate::refresh::{Admission, RefreshGate, SessionEnded};

pub(crate) const REFRESH_PATH: &str = "/auth/refresh";

/// A rebuildable request descriptor.
///
/// Replay after a refresh re-issues the same method/path/query/body instead
/// of cloning a spent `reqwest` builder.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append one query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Pricewatch API client.
///
/// Cheap to clone; every clone shares one cookie store and one refresh
/// gate, so the single-flight guarantee holds across clones.
#[derive(Clone)]
pub struct PricewatchClient {
    config: Arc<ClientConfig>,
    http: Client,
    gate: Arc<RefreshGate>,
}

impl PricewatchClient {
    /// Client configured from the environment (see
    /// [`ClientConfig::from_env`]).
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(ApiError::Http)?;
        Ok(Self {
            config: Arc::new(config),
            http,
            gate: Arc::new(RefreshGate::new()),
        })
    }

    /// Subscribe to the session-ended broadcast, fired once per failed
    /// refresh cycle. Subscribers typically force a logout flow.
    pub fn on_session_ended(&self) -> broadcast::Receiver<SessionEnded> {
        self.gate.subscribe()
    }

    /// Issue `request`, transparently refreshing the session and replaying
    /// once when it fails with 401 on a non-exempt path.
    ///
    /// Non-401 failures, 401s on exempt paths, and 401s on a replayed
    /// request all propagate unchanged.
    pub async fn send(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let response = self.issue(&request).await?;
        if response.status() != StatusCode::UNAUTHORIZED || self.config.is_exempt(&request.path) {
            return check_response(response).await;
        }

        match self.gate.admit() {
            Admission::Owner(ticket) => {
                tracing::info!(path = %request.path, "session expired; refreshing");
                let outcome = self.run_refresh().await;
                ticket.settle(outcome.clone());
                outcome?;
            }
            Admission::Queued(rx) => match rx.await {
                Ok(outcome) => outcome?,
                // The owner vanished without settling; treat as interrupted.
                Err(_) => return Err(RefreshError::interrupted().into()),
            },
        }

        // Replay at most once; a second 401 surfaces as an ordinary error.
        let replayed = self.issue(&request).await?;
        check_response(replayed).await
    }

    /// `send` plus JSON decoding of the response body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.send(request).await?;
        response.json().await.map_err(ApiError::Http)
    }

    /// `send` for endpoints whose response body is irrelevant.
    pub async fn send_unit(&self, request: ApiRequest) -> Result<()> {
        self.send(request).await?;
        Ok(())
    }

    async fn run_refresh(&self) -> std::result::Result<(), RefreshError> {
        match self.issue(&ApiRequest::post(REFRESH_PATH)).await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("session refresh succeeded");
                Ok(())
            }
            Ok(response) => {
                let status = response.status().as_u16();
                let detail = read_error_detail(response).await;
                Err(RefreshError {
                    status: Some(status),
                    detail,
                })
            }
            Err(err) => Err(RefreshError {
                status: None,
                detail: err.to_string(),
            }),
        }
    }

    async fn issue(&self, request: &ApiRequest) -> Result<reqwest::Response> {
        let url = join_url(&self.config.base_url, &request.path);
        let mut builder = self.http.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder.send().await.map_err(ApiError::Http)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Error body shape used by the API (`{"detail": ...}`).
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = read_error_detail(response).await;
    Err(ApiError::Api {
        status: status.as_u16(),
        detail,
    })
}

async fn read_error_detail(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(ApiErrorBody {
            detail: Some(Value::String(detail)),
        }) => detail,
        Ok(ApiErrorBody {
            detail: Some(other),
        }) => other.to_string(),
        _ => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://localhost:8000", "/products"), "http://localhost:8000/products");
        assert_eq!(join_url("http://localhost:8000/", "products"), "http://localhost:8000/products");
        assert_eq!(join_url("http://localhost:8000/", "/auth/me"), "http://localhost:8000/auth/me");
    }

    #[test]
    fn request_builder_accumulates_query() {
        let request = ApiRequest::get("/products")
            .query("page", 2)
            .query("brand", "LG");
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.query,
            vec![("page".to_string(), "2".to_string()), ("brand".to_string(), "LG".to_string())]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn request_builder_serializes_body() {
        let request = ApiRequest::post("/alerts")
            .json(&serde_json::json!({"model_id": "lg-c4-55", "target_price": 899.0}))
            .unwrap();
        assert_eq!(request.body.unwrap()["model_id"], "lg-c4-55");
    }
}
