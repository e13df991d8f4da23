//! HTTP plumbing between the client and the quote provider.
//!
//! The client never talks to `reqwest` directly: it hands an [`HttpRequest`] to a
//! [`Transport`] and gets an [`HttpResponse`] back. [`HttpTransport`] is the real
//! network implementation; [`crate::cassette::Cassette`] replays recorded
//! interactions instead.
use std::fmt;

use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::result::Result;

/// A GET request: endpoint URL plus query parameters in send order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// Endpoint without query string.
    pub url: String,
    /// Query parameters, unencoded.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a GET request for `url` with no parameters.
    pub fn get(url: &str) -> Self {
        HttpRequest {
            url: String::from(url),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter.
    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((String::from(key), value.into()));
        self
    }

    /// Value of the first parameter named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

/// Status and body text of a provider response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the provider's answer.
///
/// Implementations return `Ok` for any HTTP status; only failures to obtain a
/// response at all are errors.
pub trait Transport {
    /// Performs the request synchronously.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).send(request)
    }
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a client honouring the configured timeout and user agent.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        debug!("GET {}", request);
        let response = self
            .client
            .get(&request.url)
            .query(&request.query)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!("{} answered {} ({} bytes)", request.url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}
