mod categories;
mod products;

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::ApiResponse;

/// Shared client for the backend API. Every binding is a thin wrapper:
/// fixed method and path, optional query or JSON body, envelope decode.
/// No retries, no caching, no validation of what the caller passes in.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` already ends in `/api` (see `Config::api_base`). The
    /// timeout is explicit rather than whatever reqwest defaults to.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Splits the two failure channels: a non-success HTTP status becomes
    /// `ApiError::Status`, everything else decodes as the envelope and is
    /// handed back resolved, failure `code` included.
    async fn read<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(response.json::<ApiResponse<T>>().await?)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ApiClient;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::MockServer;

    pub async fn client() -> (MockServer, ApiClient) {
        let server = MockServer::start().await;
        let client = ApiClient::new(&format!("{}/api", server.uri()), Duration::from_secs(5))
            .expect("client should build");
        (server, client)
    }

    pub fn ok_envelope(data: Value) -> Value {
        json!({ "code": 0, "message": "ok", "data": data })
    }
}
