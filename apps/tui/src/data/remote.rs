use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::data::models::{CatalogSnapshot, Dataset, SiteConfig};
use crate::domain::Lang;

/// The site resource is shared by every localized page.
pub const SITE_RESOURCE: &str = "data/site.json";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid resource path {path}: {source}")]
    Url {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Loads the static JSON resources behind the catalog pages.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base: Url,
}

impl CatalogClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: Client::new(),
            base,
        }
    }

    /// Issues both startup fetches concurrently and joins them. Either failure
    /// fails the join; there are no partial results and no retry.
    pub async fn load_snapshot(&self, lang: Lang) -> Result<CatalogSnapshot> {
        let (site, datasets) = tokio::try_join!(
            self.fetch_json::<SiteConfig>(SITE_RESOURCE),
            self.fetch_json::<Vec<Dataset>>(lang.datasets_resource()),
        )?;

        tracing::debug!(datasets = datasets.len(), "catalog snapshot loaded");
        Ok(CatalogSnapshot { site, datasets })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base.join(path).map_err(|source| FetchError::Url {
            path: path.to_string(),
            source,
        })?;

        tracing::debug!(%url, "fetching catalog resource");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })
    }
}
