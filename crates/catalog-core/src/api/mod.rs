//! Catalog API
//!
//! Client for the read-only catalog service, organized as:
//! - transport: the HTTP GET port and its reqwest implementation
//! - client: URL building, status translation, payload normalization
//! - error: typed failures

mod client;
mod error;
mod transport;

use async_trait::async_trait;

use crate::models::{ids_from_urls, EntityId, Page, Resource};

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// Read operations over one collection
#[async_trait(?Send)]
pub trait CatalogApi<R: Resource> {
    /// One page of entities matching the non-empty filter fields
    async fn list(&self, filters: &R::Filters) -> ApiResult<Page<R>>;

    /// A single entity by identifier
    async fn get(&self, id: EntityId) -> ApiResult<R>;

    /// Several entities in one request, order as returned by the service
    async fn get_many(&self, ids: &[EntityId]) -> ApiResult<Vec<R>>;
}

/// Resolve cross-reference URLs (an episode's cast, a character's episodes)
pub async fn fetch_referenced<R: Resource>(
    api: &dyn CatalogApi<R>,
    urls: &[String],
) -> ApiResult<Vec<R>> {
    let ids = ids_from_urls(urls);
    api.get_many(&ids).await
}
