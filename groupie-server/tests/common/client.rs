//! HTTP client for end-to-end tests
//!
//! Wraps reqwest and provides one method per server endpoint.
//! When routes change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /
    pub async fn get_artists_page(&self) -> Response {
        self.get("/").await
    }

    /// GET /artist?id={id}
    pub async fn get_artist(&self, id: &str) -> Response {
        self.client
            .get(format!("{}/artist", self.base_url))
            .query(&[("id", id)])
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /artist without any query
    pub async fn get_artist_without_id(&self) -> Response {
        self.get("/artist").await
    }

    /// GET /status
    pub async fn get_status(&self) -> Response {
        self.get("/status").await
    }

    /// GET /static/{path}
    pub async fn get_static(&self, path: &str) -> Response {
        self.get(&format!("/static/{}", path)).await
    }
}
