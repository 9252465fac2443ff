//! Shared HTTP client for the backend's row, auth, and storage APIs.

use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use crate::config::BackendConfig;
use crate::error::Result;

/// Shared connection to the backend-as-a-service.
///
/// Every request carries the project api key; once a user session is
/// attached the bearer token switches from the api key to the session
/// token, which is what scopes row access to the signed-in user.
pub struct BackendClient {
    http: Client,
    base_url: Url,
    api_key: String,
    access_token: RwLock<Option<String>>,
}

impl BackendClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            access_token: RwLock::new(None),
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(&config.url, config.api_key.clone())
    }

    /// Attach (or clear) the signed-in user's session token.
    pub fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write() = token;
    }

    /// Resolve a path like `rest/v1/courses` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Start a request with the standard auth headers applied.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let bearer = self
            .access_token
            .read()
            .clone()
            .unwrap_or_else(|| self.api_key.clone());
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoint_paths() {
        let client = BackendClient::new("https://backend.example/", "anon-key").unwrap();
        let url = client.endpoint("rest/v1/courses").unwrap();
        assert_eq!(url.as_str(), "https://backend.example/rest/v1/courses");
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(BackendClient::new("not a url", "k").is_err());
    }
}
