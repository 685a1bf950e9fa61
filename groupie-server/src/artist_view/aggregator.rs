use tracing::debug;

use super::correlation::first_match;
use super::ArtistView;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Builds [`ArtistView`]s out of the four upstream resources.
#[derive(Clone)]
pub struct ArtistAggregator {
    client: UpstreamClient,
}

impl ArtistAggregator {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &UpstreamClient {
        &self.client
    }

    /// Fetch the artist `artist_id` and join it with its correlated records.
    ///
    /// An empty id is rejected before any request is made. A failure of the
    /// artist lookup or of any bulk collection aborts the whole view; a
    /// collection that merely lacks a record for the artist does not.
    pub async fn build_composite_view(&self, artist_id: &str) -> Result<ArtistView, UpstreamError> {
        if artist_id.is_empty() {
            return Err(UpstreamError::Validation("Missing artist ID".to_string()));
        }

        let artist = self.client.get_artist(artist_id).await?;
        // Upstream answers unknown ids with an empty artist object.
        if artist.id == 0 {
            return Err(UpstreamError::ArtistNotFound(artist_id.to_string()));
        }

        let (locations, dates, relations) = tokio::try_join!(
            self.client.get_locations(),
            self.client.get_dates(),
            self.client.get_relations(),
        )?;

        let location = first_match(locations, artist.id);
        let date = first_match(dates, artist.id);
        let relation = first_match(relations, artist.id);

        debug!(
            "Artist {} correlated: location={} dates={} relation={}",
            artist.id,
            location.id == artist.id,
            date.id == artist.id,
            relation.id == artist.id,
        );

        Ok(ArtistView {
            artist,
            location,
            date,
            relation,
        })
    }
}
