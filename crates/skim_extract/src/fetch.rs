use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, UPGRADE_INSECURE_REQUESTS,
    USER_AGENT,
};
use reqwest::Client;
use url::Url;

use skim_core::{Error, Result};

/// Fetches the raw HTML for a URL without executing any page scripts.
#[async_trait]
pub trait FetchPage: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

// Browser-like request headers; some news sites refuse obvious bots.
// Accept-Encoding is left to the client, which negotiates and transparently
// decodes gzip/deflate/brotli on its own.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:90.0) Gecko/20100101 Firefox/90.0",
        ),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchPage for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = Url::parse(url).map_err(|e| Error::Fetch(format!("invalid URL {}: {}", url, e)))?;

        let response = self
            .client
            .get(url)
            .headers(browser_headers())
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        response.text().await.map_err(|e| Error::Fetch(e.to_string()))
    }
}
