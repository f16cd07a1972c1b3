use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// A fully built provider request, credentials included.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Network-level failure: connect, DNS, TLS, timeout or body read.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    /// Drops the request URL, which may carry query credentials, and keeps
    /// the cause chain so the caller sees e.g. `Connection refused`.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self(message)
    }
}

/// Sends one request and returns the raw response. Implementations must not
/// retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<OutboundResponse, TransportError>;
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<OutboundResponse, TransportError> {
        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(OutboundResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn connect_failure_hides_url_and_names_cause() {
        let port = closed_port().await;
        let url = Url::parse(&format!(
            "http://127.0.0.1:{port}/api/companies/x?api_key=SECRETKEY&api_token=SECRETTOKEN"
        ))
        .unwrap();

        let err = ReqwestTransport::new()
            .send(OutboundRequest {
                method: Method::GET,
                url,
                headers: Vec::new(),
                body: None,
            })
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(!message.contains("SECRETKEY"), "{message}");
        assert!(!message.contains("SECRETTOKEN"), "{message}");
        assert!(message.to_lowercase().contains("connect"), "{message}");
        assert!(message.contains(": "), "cause chain missing: {message}");
    }
}
