//! Per-artist composite view: the artist joined with its location, date and
//! relation records.

mod aggregator;
mod correlation;

pub use aggregator::ArtistAggregator;
pub use correlation::first_match;

use serde::{Deserialize, Serialize};

use crate::upstream::{Artist, DateRecord, LocationRecord, RelationRecord};

/// Result of the join for one artist.
///
/// Correlated records that upstream doesn't have for this artist are left as
/// their zero value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistView {
    pub artist: Artist,
    pub location: LocationRecord,
    pub date: DateRecord,
    pub relation: RelationRecord,
}
