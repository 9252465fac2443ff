//! Client-credentials token source for the music catalog.
//!
//! The catalog's search API wants a bearer token minted by a fixed token
//! issuer. The exchange uses the client id/secret held server-side (env,
//! never the TOML file). Tokens are cached until shortly before expiry;
//! a failed exchange is surfaced as-is, never retried.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{CatalogError, Result};

/// Refresh this long before the issuer-reported expiry.
const EXPIRY_MARGIN_SECS: i64 = 30;

struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Mints and caches catalog bearer tokens.
pub struct TokenSource {
    http: Client,
    token_url: Url,
    client_id: String,
    client_secret: String,
    cached: RwLock<Option<CachedToken>>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

impl TokenSource {
    pub fn new(
        token_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            token_url: Url::parse(token_url)?,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            cached: RwLock::new(None),
        })
    }

    /// A valid bearer token, exchanged fresh if the cached one has expired.
    pub async fn bearer(&self) -> Result<String> {
        if let Some(token) = self.cached_value() {
            return Ok(token);
        }

        debug!("exchanging catalog client credentials");
        let response = self
            .http
            .post(self.token_url.clone())
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::TokenExchange {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body: TokenResponse = response.json().await?;
        let expires_at = Utc::now() + Duration::seconds(body.expires_in - EXPIRY_MARGIN_SECS);
        let value = body.access_token.clone();
        *self.cached.write() = Some(CachedToken {
            value: body.access_token,
            expires_at,
        });
        Ok(value)
    }

    fn cached_value(&self) -> Option<String> {
        let cached = self.cached.read();
        cached
            .as_ref()
            .filter(|t| t.expires_at > Utc::now())
            .map(|t| t.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> TokenSource {
        TokenSource::new("https://issuer.example/api/token", "id", "secret").unwrap()
    }

    #[test]
    fn unexpired_token_is_reused() {
        let source = source();
        *source.cached.write() = Some(CachedToken {
            value: "live".into(),
            expires_at: Utc::now() + Duration::seconds(600),
        });
        assert_eq!(source.cached_value().as_deref(), Some("live"));
    }

    #[test]
    fn expired_token_is_not_reused() {
        let source = source();
        *source.cached.write() = Some(CachedToken {
            value: "stale".into(),
            expires_at: Utc::now() - Duration::seconds(1),
        });
        assert!(source.cached_value().is_none());
    }

    #[test]
    fn token_response_deserializes() {
        let json = serde_json::json!({
            "access_token": "tok",
            "token_type": "Bearer",
            "expires_in": 3600
        });
        let parsed: TokenResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.access_token, "tok");
        assert_eq!(parsed.expires_in, 3600);
    }
}
