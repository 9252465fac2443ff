//! Outbound adapters: concrete implementations of the outbound ports.

pub mod auth;
pub mod catalog;
pub mod rest;
pub mod storage;

pub use auth::RestAuth;
pub use catalog::{CatalogClient, TokenSource};
pub use rest::{BackendClient, RestGateway};
pub use storage::RestStorage;
