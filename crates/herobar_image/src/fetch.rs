//! Byte fetching

use std::future::Future;

use url::Url;

use crate::error::Result;

/// Fetches the encoded bytes behind a URL
pub trait ImageFetcher: Send + Sync + 'static {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// HTTP(S) fetcher backed by reqwest
#[cfg(feature = "network")]
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

#[cfg(feature = "network")]
impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "network")]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        use crate::error::ImageError;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ImageError::Network(e.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
