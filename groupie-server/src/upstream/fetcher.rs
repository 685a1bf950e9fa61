//! Raw HTTP access to the upstream API.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::FetchError;

/// Issues a GET and hands back the full response body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// [`Fetcher`] backed by a shared `reqwest` client.
///
/// The status code is not inspected: whatever body upstream answers with is
/// returned, and only connection-level failures are errors. No timeout is set
/// on the client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        debug!("GET {} -> {}", url, response.status());
        // Consumes the response, returning the connection to the pool.
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
