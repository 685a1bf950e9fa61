//! Shared constants for end-to-end tests
//!
//! This module contains the upstream fixture payloads and the values tests
//! assert against. When fixture data changes, update only this file.

// ============================================================================
// Fixture Artists
// ============================================================================

/// Artist with a record in every correlated collection
pub const QUEEN_ID: &str = "1";
pub const QUEEN_NAME: &str = "Queen";

/// Artist without a dates record upstream
pub const SOJA_ID: &str = "2";
pub const SOJA_NAME: &str = "SOJA";

/// Artist id the fake upstream does not know
pub const UNKNOWN_ARTIST_ID: &str = "99";

// ============================================================================
// Fixture Payloads
// ============================================================================

pub const ARTISTS_JSON: &str = r#"[
    {"id":1,"image":"https://img.test/queen.jpeg","name":"Queen","members":["Freddie Mercury","Brian May","John Deacon","Roger Taylor"],"creationDate":1970,"firstAlbum":"14-12-1973"},
    {"id":2,"image":"https://img.test/soja.jpeg","name":"SOJA","members":["Jacob Hemphill","Bob Jefferson"],"creationDate":1997,"firstAlbum":"05-06-2002"}
]"#;

pub const QUEEN_JSON: &str = r#"{"id":1,"image":"https://img.test/queen.jpeg","name":"Queen","members":["Freddie Mercury","Brian May","John Deacon","Roger Taylor"],"creationDate":1970,"firstAlbum":"14-12-1973"}"#;

pub const SOJA_JSON: &str = r#"{"id":2,"image":"https://img.test/soja.jpeg","name":"SOJA","members":["Jacob Hemphill","Bob Jefferson"],"creationDate":1997,"firstAlbum":"05-06-2002"}"#;

pub const LOCATIONS_JSON: &str = r#"{"index":[
    {"id":1,"locations":["london-uk","paris-france"]},
    {"id":2,"locations":["playa_del_carmen-mexico"]},
    {"id":1,"locations":["duplicate-should_not_win"]}
]}"#;

pub const DATES_JSON: &str = r#"{"index":[
    {"id":1,"dates":["*01-01-1975","02-01-1975"]}
]}"#;

pub const RELATIONS_JSON: &str = r#"{"index":[
    {"id":1,"datesLocations":{"london-uk":["01-01-1975"],"paris-france":["02-01-1975"]}},
    {"id":2,"datesLocations":{"playa_del_carmen-mexico":["05-12-2019"]}}
]}"#;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Base URL where nothing is listening
pub const UNREACHABLE_API_BASE_URL: &str = "http://127.0.0.1:9/api";
