//! Blocking HTTP transport.

use ratefetch_types::RateError;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("ratefetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors raised by the transport layer.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The query could not be turned into a URL.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl {
        /// The offending base URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl From<DownloadError> for RateError {
    fn from(err: DownloadError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A GET request: base URL plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// URL without query string.
    pub url: String,
    /// Query parameters, in order.
    pub params: Vec<(&'static str, String)>,
}

impl Query {
    /// Creates a new query.
    #[must_use]
    pub const fn new(url: String, params: Vec<(&'static str, String)>) -> Self {
        Self { url, params }
    }

    /// Returns the URL with its form-encoded query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid URL.
    pub fn full_url(&self) -> Result<String, DownloadError> {
        reqwest::Url::parse_with_params(&self.url, &self.params)
            .map(String::from)
            .map_err(|e| DownloadError::InvalidUrl {
                url: self.url.clone(),
                reason: e.to_string(),
            })
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl Response {
    /// Returns true for HTTP 200, the only status the data APIs use for data.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// A blocking GET transport.
///
/// Implementations must not interpret the status code; that is left to the
/// caller so that every non-success status surfaces the same way.
pub trait Transport: Send + Sync {
    /// Performs a single GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    fn get(&self, query: &Query) -> Result<Response, DownloadError>;
}

/// Blocking HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }
}

impl Transport for HttpClient {
    fn get(&self, query: &Query) -> Result<Response, DownloadError> {
        let response = self.client.get(&query.url).query(&query.params).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(Response { status, body })
    }
}

/// Performs `query` and returns the body of a successful response.
pub(crate) fn fetch_body<T: Transport + ?Sized>(
    transport: &T,
    query: &Query,
) -> Result<String, RateError> {
    debug!(url = %query.url, params = ?query.params, "sending request");
    let response = transport.get(query)?;

    if !response.is_success() {
        warn!(url = %query.url, status = response.status, "query failed");
        return Err(RateError::Request {
            status: response.status,
            url: query.url.clone(),
        });
    }

    debug!(url = %query.url, bytes = response.body.len(), "received response");
    Ok(response.body)
}


#[cfg(test)]
mod tests {
    use super::stub::StubTransport;
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("ratefetch/"));
    }

    #[test]
    fn test_client_creation() {
        let client = HttpClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_fetch_body_success() {
        let transport = StubTransport::new(200, "[]");
        let query = Query::new("http://example.com/data".to_string(), vec![]);
        assert_eq!(fetch_body(&transport, &query).unwrap(), "[]");
        assert_eq!(transport.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_fetch_body_non_success_status() {
        for status in [201, 404, 500] {
            let transport = StubTransport::new(status, "oops");
            let query = Query::new("http://example.com/data".to_string(), vec![]);
            let err = fetch_body(&transport, &query).unwrap_err();
            assert!(
                matches!(err, RateError::Request { status: s, ref url } if s == status && url == "http://example.com/data")
            );
        }
    }

    #[test]
    fn test_full_url_invalid_base() {
        let query = Query::new("not a url".to_string(), vec![("a", "b".to_string())]);
        assert!(matches!(query.full_url(), Err(DownloadError::InvalidUrl { .. })));
    }
}
