//! In-memory [`Fetcher`] used by unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::error::FetchError;
use super::fetcher::Fetcher;

pub const MOCK_BASE_URL: &str = "http://upstream.test/api";

enum MockResponse {
    Body(Vec<u8>),
    ConnectionError,
}

/// Serves canned bodies by URL and counts every call.
///
/// Unknown URLs answer with the plain-text not-found body a Go mux would send,
/// which is not valid JSON.
pub struct MockFetcher {
    responses: Mutex<HashMap<String, MockResponse>>,
    call_counts: Mutex<HashMap<String, usize>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            call_counts: Mutex::new(HashMap::new()),
        }
    }

    /// The Queen scenario: one artist with a record in every collection.
    pub fn with_queen() -> Self {
        let fetcher = Self::new();
        fetcher.add_body(
            "/artists",
            r#"[{"id":1,"name":"Queen","image":"queen.jpeg","members":["Freddie Mercury"],"creationDate":1970,"firstAlbum":"14-12-1973"}]"#,
        );
        fetcher.add_body(
            "/artists/1",
            r#"{"id":1,"name":"Queen","image":"queen.jpeg","members":["Freddie Mercury"],"creationDate":1970,"firstAlbum":"14-12-1973"}"#,
        );
        fetcher.add_body(
            "/locations",
            r#"{"index":[{"id":1,"locations":["london","paris"]}]}"#,
        );
        fetcher.add_body("/dates", r#"{"index":[{"id":1,"dates":["1975-01-01"]}]}"#);
        fetcher.add_body(
            "/relation",
            r#"{"index":[{"id":1,"datesLocations":{"london":["1975-01-01"]}}]}"#,
        );
        fetcher
    }

    pub fn add_body(&self, path: &str, body: &str) {
        self.responses.lock().unwrap().insert(
            format!("{}{}", MOCK_BASE_URL, path),
            MockResponse::Body(body.as_bytes().to_vec()),
        );
    }

    pub fn fail_connection(&self, path: &str) {
        self.responses.lock().unwrap().insert(
            format!("{}{}", MOCK_BASE_URL, path),
            MockResponse::ConnectionError,
        );
    }

    pub fn get_call_count(&self, path: &str) -> usize {
        *self
            .call_counts
            .lock()
            .unwrap()
            .get(&format!("{}{}", MOCK_BASE_URL, path))
            .unwrap_or(&0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn increment_call(&self, url: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(url.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.increment_call(url);
        let body = match self.responses.lock().unwrap().get(url) {
            Some(MockResponse::Body(body)) => Some(body.clone()),
            Some(MockResponse::ConnectionError) => None,
            None => Some(b"404 page not found\n".to_vec()),
        };
        match body {
            Some(body) => Ok(body),
            // An unparsable host fails inside reqwest without touching the network.
            None => Err(reqwest::get("http://[unreachable").await.unwrap_err().into()),
        }
    }
}
