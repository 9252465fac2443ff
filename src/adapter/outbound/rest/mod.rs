//! Backend row-store adapter: shared client plus per-table gateways.

mod client;
mod gateway;

pub use client::BackendClient;
pub use gateway::RestGateway;
