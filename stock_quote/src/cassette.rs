//! Replay transport answering from recorded provider interactions.
//!
//! A cassette is a JSON document:
//!
//! ```json
//! { "interactions": [
//!     { "request":  { "url": "http://…/quotes.csv", "query": { "s": "aapl" } },
//!       "response": { "status": 200, "body": "\"AAPL\",…" } }
//! ] }
//! ```
//!
//! A request matches an interaction when the URL is equal and every recorded
//! query pair is present in the request. Parameters left out of the recording
//! (such as date parts of a "last 20 days" window) therefore match anything.
//! The first matching interaction answers.
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::net::{HttpRequest, HttpResponse, Transport};
use crate::result::Result;

/// Request side of a recorded interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    /// Endpoint without query string.
    pub url: String,
    /// Query pairs the request must carry.
    #[serde(default)]
    pub query: BTreeMap<String, String>,
}

impl RecordedRequest {
    fn matches(&self, request: &HttpRequest) -> bool {
        self.url == request.url
            && self
                .query
                .iter()
                .all(|(key, value)| request.query_value(key) == Some(value.as_str()))
    }
}

/// One request/response pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// What the request must look like.
    pub request: RecordedRequest,
    /// What to answer.
    pub response: HttpResponse,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CassetteFile {
    interactions: Vec<Interaction>,
}

/// `Transport` that replays [`Interaction`]s and remembers what it was asked.
#[derive(Debug, Default)]
pub struct Cassette {
    interactions: Vec<Interaction>,
    played: Mutex<Vec<HttpRequest>>,
}

impl Cassette {
    /// Creates a cassette from interactions.
    pub fn new(interactions: Vec<Interaction>) -> Self {
        Cassette {
            interactions,
            played: Mutex::new(Vec::new()),
        }
    }

    /// Parses a cassette document.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CassetteFile = serde_json::from_str(json)?;
        Ok(Self::new(file.interactions))
    }

    /// Loads a cassette document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Adds an interaction answering GETs of `url` carrying `query`.
    pub fn with(mut self, url: &str, query: &[(&str, &str)], status: u16, body: &str) -> Self {
        self.interactions.push(Interaction {
            request: RecordedRequest {
                url: url.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
            response: HttpResponse {
                status,
                body: body.to_string(),
            },
        });
        self
    }

    /// Requests answered so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.played
            .lock()
            .map(|played| played.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Transport for Cassette {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let interaction = self
            .interactions
            .iter()
            .find(|i| i.request.matches(request))
            .ok_or_else(|| QuoteError::Replay(request.to_string()))?;

        debug!("replaying {} -> {}", request, interaction.response.status);
        match self.played.lock() {
            Ok(mut played) => played.push(request.clone()),
            Err(poisoned) => poisoned.into_inner().push(request.clone()),
        }
        Ok(interaction.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://example.test/table.csv";

    #[test]
    fn unrecorded_params_are_wildcards() {
        let cassette = Cassette::default().with(URL, &[("s", "aapl")], 200, "body");
        let request = HttpRequest::get(URL).param("s", "aapl").param("a", "0");

        let response = cassette.send(&request).unwrap();
        assert_eq!(response.body, "body");
        assert_eq!(cassette.requests(), vec![request]);
    }

    #[test]
    fn first_match_wins() {
        let cassette = Cassette::default()
            .with(URL, &[("s", "aapl"), ("c", "2012")], 200, "2012")
            .with(URL, &[("s", "aapl")], 200, "any");

        let dated = HttpRequest::get(URL).param("s", "aapl").param("c", "2012");
        let undated = HttpRequest::get(URL).param("s", "aapl").param("c", "2026");
        assert_eq!(cassette.send(&dated).unwrap().body, "2012");
        assert_eq!(cassette.send(&undated).unwrap().body, "any");
    }

    #[test]
    fn unmatched_request_is_a_replay_error() {
        let cassette = Cassette::default().with(URL, &[("s", "aapl")], 200, "");
        let request = HttpRequest::get(URL).param("s", "tsla");

        assert!(matches!(cassette.send(&request), Err(QuoteError::Replay(_))));
        assert!(cassette.requests().is_empty());
    }

    #[test]
    fn parses_json_documents() {
        let json = r#"{"interactions":[{"request":{"url":"http://example.test/table.csv","query":{"s":"asdf"}},"response":{"status":404,"body":"Not Found"}}]}"#;
        let cassette = Cassette::from_json(json).unwrap();
        let response = cassette.send(&HttpRequest::get(URL).param("s", "asdf")).unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, "Not Found");
    }
}
