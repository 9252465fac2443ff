//! Outbound ports: the traits adapters implement for remote collaborators.

pub mod auth;
pub mod catalog;
pub mod storage;
pub mod store;

pub use auth::{AuthProvider, Session, User};
pub use catalog::{MusicCatalog, Page};
pub use storage::ObjectStorage;
pub use store::{Entity, EntityGateway};
