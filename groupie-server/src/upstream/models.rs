//! Records returned by the upstream API.
//!
//! Field names follow the upstream JSON. Missing or null fields decode to
//! their zero value, so a partial payload still yields a record.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Artist {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub members: Vec<String>,
    pub creation_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub first_album: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationRecord {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DateRecord {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dates: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelationRecord {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// `GET /locations` payload: `{"index": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationsIndex {
    #[serde(deserialize_with = "null_as_default")]
    pub index: Vec<LocationRecord>,
}

/// `GET /dates` payload: `{"index": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DatesIndex {
    #[serde(deserialize_with = "null_as_default")]
    pub index: Vec<DateRecord>,
}

/// `GET /relation` payload: `{"index": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelationsIndex {
    #[serde(deserialize_with = "null_as_default")]
    pub index: Vec<RelationRecord>,
}

/// Records that belong to an artist through a shared identifier.
pub trait ArtistKeyed {
    fn artist_id(&self) -> i64;
}

impl ArtistKeyed for LocationRecord {
    fn artist_id(&self) -> i64 {
        self.id
    }
}

impl ArtistKeyed for DateRecord {
    fn artist_id(&self) -> i64 {
        self.id
    }
}

impl ArtistKeyed for RelationRecord {
    fn artist_id(&self) -> i64 {
        self.id
    }
}
