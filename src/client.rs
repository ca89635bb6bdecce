use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::io;

/// The error type for the transport layer underneath a worker.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// A client capable of issuing one GET and returning the full response body.
///
/// A non-2xx status is not an error, only a transport-level failure is.
#[async_trait]
pub trait GetClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, ClientError>;
}

/// Creates one client per worker, so workers never share a connection.
pub trait ClientFactory: Send + Sync {
    fn create_client(&self) -> Result<Box<dyn GetClient>, ClientError>;
}

#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl GetClient for HttpClient {
    async fn get(&self, url: &str) -> Result<String, ClientError> {
        let response = self.client.get(url).send().await?;
        let body = response.text().await?;
        Ok(body)
    }
}

pub struct HttpClientFactory {
    timeout: Option<Duration>,
}

impl HttpClientFactory {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl ClientFactory for HttpClientFactory {
    fn create_client(&self) -> Result<Box<dyn GetClient>, ClientError> {
        Ok(Box::new(HttpClient::new(self.timeout)?))
    }
}
