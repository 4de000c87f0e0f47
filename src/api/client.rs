//! reqwest-backed transport: one multipart call per submission.

use super::Operation;
use crate::config::Config;
use crate::form::EncodedRequest;
use crate::submit::{Transport, TransportError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{info, instrument};
use url::Url;

const USER_AGENT: &str = concat!("ladle/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the recipe service. Cheap to clone; holds one
/// connection pool for the whole form lifecycle.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        Ok(Self {
            http,
            base: config.base_url.clone(),
        })
    }

    /// Compose the request URL under the base, keeping any path prefix
    /// the base carries (`/api/v1` + `/auth/login` → `/api/v1/auth/login`).
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let prefix = self.base.path().trim_end_matches('/');
        url.set_path(&format!("{}/{}", prefix, path.trim_start_matches('/')));
        url
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.endpoint(path);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_send_error)?;
        decode_response(response).await
    }
}

#[async_trait]
impl Transport for ApiClient {
    #[instrument(skip(self, request), fields(operation = op.name))]
    async fn submit(
        &self,
        op: &Operation,
        request: EncodedRequest,
    ) -> Result<Value, TransportError> {
        let url = self.endpoint(&op.path);
        let attachments = request.files().len();
        let form = request
            .into_multipart()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        info!(%url, attachments, "submitting form");
        let response = self
            .http
            .request(op.method.clone(), url)
            .multipart(form)
            .send()
            .await
            .map_err(classify_send_error)?;

        decode_response(response).await
    }
}

fn classify_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Offline
    } else {
        TransportError::RequestFailed(err.to_string())
    }
}

/// 2xx bodies pass through opaquely; anything else surfaces the
/// server's `message` field, falling back to the status line.
async fn decode_response(response: Response) -> Result<Value, TransportError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()));
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP {}", status));
    Err(TransportError::Rejected(message))
}
