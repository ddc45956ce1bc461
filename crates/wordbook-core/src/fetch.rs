use std::time::Duration;

use async_trait::async_trait;

/// Outbound page download
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the response body; any non-success status is an error
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    /// The server answered, it just did not have the page
    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Status(_))
    }
}

/// [`PageFetcher`] backed by a shared `reqwest` client
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(classify)
    }
}
