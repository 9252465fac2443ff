//! Authentication port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::error::Result;

/// An authenticated backend user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
}

/// A live session: the bearer token plus the user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

/// Auth operations against the backend's auth collaborator.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Register a new user and return the opened session.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session>;

    /// Open a session with email/password credentials.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Invalidate the session behind the given token.
    async fn sign_out(&self, access_token: &str) -> Result<()>;

    /// Resolve the user behind a token; `None` when the token is no longer
    /// valid (expired or signed out).
    async fn current_user(&self, access_token: &str) -> Result<Option<User>>;
}
