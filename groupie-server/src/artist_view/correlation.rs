use crate::upstream::models::ArtistKeyed;

/// First record in `records` keyed to `artist_id`, or the zero record.
///
/// Records are scanned in the order upstream returned them. Duplicate ids are
/// not detected; the earliest one wins.
pub fn first_match<T>(records: Vec<T>, artist_id: i64) -> T
where
    T: ArtistKeyed + Default,
{
    records
        .into_iter()
        .find(|record| record.artist_id() == artist_id)
        .unwrap_or_default()
}
