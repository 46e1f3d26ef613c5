//! Catalog Client
//!
//! Builds request URLs, issues GETs through the transport port and
//! translates HTTP outcomes into pages, entities or typed failures.

use std::rc::Rc;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::transport::{HttpResponse, HttpTransport, ReqwestTransport};
use super::CatalogApi;
use crate::config::ClientConfig;
use crate::filters::{encode_query, FilterSet};
use crate::models::{EntityId, Page, Resource};

/// Multi-id lookups answer with a bare object when exactly one id is asked for
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<R> {
    Many(Vec<R>),
    One(R),
}

impl<R> From<OneOrMany<R>> for Vec<R> {
    fn from(payload: OneOrMany<R>) -> Self {
        match payload {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    /// Client over the network transport
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config.api_base_url.clone(), Rc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn list_url<R: Resource>(&self, filters: &R::Filters) -> String {
        format!("{}/{}?{}", self.base_url, R::PATH, encode_query(&filters.query_pairs()))
    }

    pub fn entity_url<R: Resource>(&self, id: EntityId) -> String {
        format!("{}/{}/{}", self.base_url, R::PATH, id)
    }

    pub fn many_url<R: Resource>(&self, ids: &[EntityId]) -> String {
        let joined = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
        format!("{}/{}/{}", self.base_url, R::PATH, joined)
    }

    async fn fetch(&self, url: &str) -> ApiResult<HttpResponse> {
        debug!("GET {}", url);
        match self.transport.get(url).await {
            Ok(response) => {
                debug!("GET {} -> {}", url, response.status);
                Ok(response)
            }
            Err(e) => {
                warn!("GET {} failed: {}", url, e);
                Err(e)
            }
        }
    }
}

#[async_trait(?Send)]
impl<R: Resource> CatalogApi<R> for ApiClient {
    async fn list(&self, filters: &R::Filters) -> ApiResult<Page<R>> {
        let response = self.fetch(&self.list_url::<R>(filters)).await?;

        if response.status == 404 {
            return Ok(Page::empty());
        }
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                reason: response.reason,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    async fn get(&self, id: EntityId) -> ApiResult<R> {
        let response = self.fetch(&self.entity_url::<R>(id)).await?;

        if !response.is_success() {
            return Err(ApiError::NotFound { label: R::LABEL, id });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    async fn get_many(&self, ids: &[EntityId]) -> ApiResult<Vec<R>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let failed = || ApiError::FetchMany { label: R::LABEL };

        let response = self.fetch(&self.many_url::<R>(ids)).await.map_err(|_| failed())?;
        if !response.is_success() {
            return Err(failed());
        }

        let payload: OneOrMany<R> = serde_json::from_str(&response.body).map_err(|e| {
            warn!("Undecodable {} list: {}", R::PATH, e);
            failed()
        })?;
        Ok(payload.into())
    }
}
