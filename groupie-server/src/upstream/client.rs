//! Typed accessors for the upstream resources.

use std::sync::Arc;
use tracing::error;

use super::decoder::decode;
use super::error::{Resource, UpstreamError};
use super::fetcher::Fetcher;
use super::models::{
    Artist, DateRecord, DatesIndex, LocationRecord, LocationsIndex, RelationRecord, RelationsIndex,
};

pub const DEFAULT_API_BASE_URL: &str = "https://groupietrackers.herokuapp.com/api";

pub const ARTISTS_PATH: &str = "/artists";
pub const LOCATIONS_PATH: &str = "/locations";
pub const DATES_PATH: &str = "/dates";
pub const RELATION_PATH: &str = "/relation";

/// Client for the artists API.
///
/// Every call goes to the network, nothing is cached between calls.
#[derive(Clone)]
pub struct UpstreamClient {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(fetcher: Arc<dyn Fetcher>, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { fetcher, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn artist_url(&self, id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            ARTISTS_PATH,
            urlencoding::encode(id)
        )
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        resource: Resource,
        url: &str,
    ) -> Result<T, UpstreamError> {
        let bytes = match self.fetcher.fetch(url).await {
            Ok(bytes) => bytes,
            Err(source) => {
                error!("Error fetching {}: {}", resource, source);
                return Err(UpstreamError::Transport { resource, source });
            }
        };
        decode(resource, &bytes).inspect_err(|err| error!("{}", err))
    }

    pub async fn get_artists(&self) -> Result<Vec<Artist>, UpstreamError> {
        self.get(Resource::Artists, &self.full_url(ARTISTS_PATH))
            .await
    }

    pub async fn get_artist(&self, id: &str) -> Result<Artist, UpstreamError> {
        self.get(Resource::Artist, &self.artist_url(id)).await
    }

    pub async fn get_locations(&self) -> Result<Vec<LocationRecord>, UpstreamError> {
        let locations: LocationsIndex = self
            .get(Resource::Locations, &self.full_url(LOCATIONS_PATH))
            .await?;
        Ok(locations.index)
    }

    pub async fn get_dates(&self) -> Result<Vec<DateRecord>, UpstreamError> {
        let dates: DatesIndex = self
            .get(Resource::Dates, &self.full_url(DATES_PATH))
            .await?;
        Ok(dates.index)
    }

    pub async fn get_relations(&self) -> Result<Vec<RelationRecord>, UpstreamError> {
        let relations: RelationsIndex = self
            .get(Resource::Relations, &self.full_url(RELATION_PATH))
            .await?;
        Ok(relations.index)
    }
}
