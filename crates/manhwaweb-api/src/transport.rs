use std::future::Future;

use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Errors raised while fetching a response body. Never retried here.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },
}

/// Fetches raw response bodies for the client.
pub trait Transport: Send + Sync {
    fn fetch(
        &self,
        url: &Url,
        headers: &[(&'static str, String)],
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TransportError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "ManhwaWeb API error");
            Err(TransportError::Status {
                status,
                message: body,
            })
        }
    }
}

impl Transport for HttpTransport {
    async fn fetch(
        &self,
        url: &Url,
        headers: &[(&'static str, String)],
    ) -> Result<String, TransportError> {
        let mut req = self.http.get(url.clone());
        for (name, value) in headers {
            req = req.header(*name, value.as_str());
        }

        let resp = req.send().await?;
        let resp = Self::check_response(resp).await?;
        Ok(resp.text().await?)
    }
}
