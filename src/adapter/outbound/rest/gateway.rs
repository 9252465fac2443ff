//! Row-store gateway speaking the backend's PostgREST-style API.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use super::client::BackendClient;
use crate::domain::sort::SortKey;
use crate::error::{Result, StoreError};
use crate::port::outbound::store::{Entity, EntityGateway};

/// Gateway for one table of the remote row store.
///
/// Thin by contract: one round trip per operation, no retries, no
/// validation. Insert and update ask the store to return the resulting
/// representation so the caller always reconciles against server rows.
pub struct RestGateway<E> {
    client: Arc<BackendClient>,
    table: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E> RestGateway<E> {
    pub fn new(client: Arc<BackendClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
            _entity: PhantomData,
        }
    }

    fn table_url(&self) -> Result<url::Url> {
        self.client.endpoint(&format!("rest/v1/{}", self.table))
    }

    /// Execute a request, mapping transport and status failures into
    /// [`StoreError`] and decoding the JSON body into `T`.
    async fn run<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await.map_err(StoreError::Http)?;
        let status = response.status();
        let body = response.text().await.map_err(StoreError::Http)?;
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }
        Ok(serde_json::from_str(&body).map_err(StoreError::Decode)?)
    }

    fn not_found(&self, id: impl ToString) -> StoreError {
        StoreError::NotFound {
            table: self.table.clone(),
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityGateway<E> for RestGateway<E> {
    async fn fetch_all(&self, sort: SortKey) -> Result<Vec<E>> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", sort.order_param());

        debug!(table = %self.table, order = sort.order_param(), "fetching rows");
        let rows: Vec<E> = self.run(self.client.request(Method::GET, url)).await?;
        debug!(table = %self.table, count = rows.len(), "fetched rows");
        Ok(rows)
    }

    async fn insert(&self, draft: E::Draft) -> Result<E> {
        let url = self.table_url()?;
        debug!(table = %self.table, "inserting row");

        let rows: Vec<E> = self
            .run(
                self.client
                    .request(Method::POST, url)
                    .header("Prefer", "return=representation")
                    .json(&draft),
            )
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| self.not_found("<inserted>").into())
    }

    async fn update(&self, id: &E::Id, patch: E::Patch) -> Result<E> {
        let mut url = self.table_url()?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));

        debug!(table = %self.table, %id, "updating row");
        let rows: Vec<E> = self
            .run(
                self.client
                    .request(Method::PATCH, url)
                    .header("Prefer", "return=representation")
                    .json(&patch),
            )
            .await?;

        // An empty representation means the filter matched no row.
        rows.into_iter()
            .next()
            .ok_or_else(|| self.not_found(id).into())
    }

    async fn delete(&self, id: &E::Id) -> Result<()> {
        let mut url = self.table_url()?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));

        debug!(table = %self.table, %id, "deleting row");
        let rows: Vec<serde_json::Value> = self
            .run(
                self.client
                    .request(Method::DELETE, url)
                    .header("Prefer", "return=representation"),
            )
            .await?;

        if rows.is_empty() {
            return Err(self.not_found(id).into());
        }
        Ok(())
    }
}
