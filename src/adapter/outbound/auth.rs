//! Auth adapter against the backend's GoTrue-style endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rest::BackendClient;
use crate::error::{AuthError, Result};
use crate::port::outbound::auth::{AuthProvider, Session, User};

/// Auth operations over the shared backend client.
pub struct RestAuth {
    client: Arc<BackendClient>,
}

impl RestAuth {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    async fn session_request(&self, path: &str, body: &Credentials<'_>) -> Result<Session> {
        let url = self.client.endpoint(path)?;
        let response = self
            .client
            .request(Method::POST, url)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials.into());
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body: SessionResponse = response.json().await?;
        Ok(Session {
            access_token: body.access_token,
            user: body.user,
        })
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    access_token: String,
    user: User,
}

#[async_trait]
impl AuthProvider for RestAuth {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session> {
        debug!(email, "signing up");
        self.session_request("auth/v1/signup", &Credentials { email, password })
            .await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        debug!(email, "signing in");
        self.session_request(
            "auth/v1/token?grant_type=password",
            &Credentials { email, password },
        )
        .await
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        let url = self.client.endpoint("auth/v1/logout")?;
        let response = self
            .client
            .request(Method::POST, url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        // An already-expired token is as signed out as it gets.
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(());
        }
        let message = response.text().await.unwrap_or_default();
        Err(AuthError::Rejected {
            status: status.as_u16(),
            message,
        }
        .into())
    }

    async fn current_user(&self, access_token: &str) -> Result<Option<User>> {
        let url = self.client.endpoint("auth/v1/user")?;
        let response = self
            .client
            .request(Method::GET, url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }
        Ok(Some(response.json().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_as_email_password() {
        let body = Credentials {
            email: "runner@example.com",
            password: "hunter2",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "runner@example.com", "password": "hunter2" })
        );
    }

    #[test]
    fn session_response_deserializes() {
        let json = serde_json::json!({
            "access_token": "jwt",
            "token_type": "bearer",
            "user": { "id": "c56a4180-65aa-42ec-a945-5fd21dec0538", "email": "runner@example.com" }
        });
        let parsed: SessionResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.access_token, "jwt");
        assert_eq!(parsed.user.email, "runner@example.com");
    }
}
