use crate::client::config::ClientConfig;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, Proxy};
use url::Url;

/// Thin wrapper over a pooled `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
}

/// Everything needed to put one request on the wire, built once per call and
/// reused unchanged by every attempt.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// A received response with its body fully read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout))
            // Send `X-Project-Id` rather than `x-project-id` on HTTP/1.
            .http1_title_case_headers();

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy url: {}", e),
                    ErrorContext::new().with_source("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(client_build_error)?;

        Ok(Self { client })
    }

    /// Use a caller-provided `reqwest::Client` as is.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Perform exactly one HTTP exchange.
    ///
    /// Failing to get a response is `Error::Transport`. Failing to read the
    /// body of a response that did arrive is `Error::Decode`.
    pub async fn send(&self, request: &PreparedRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let resp = builder.send().await.map_err(TransportError::Http)?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();

        // No content: the body is not read.
        if status == 204 {
            return Ok(RawResponse {
                status,
                headers,
                body: Bytes::new(),
            });
        }

        let body = resp.bytes().await.map_err(|e| {
            Error::decode_with_context(
                format!("failed to read response: {}", e),
                ErrorContext::new().with_source("response_body"),
            )
        })?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

// Building the client happens before any I/O, so a failure is a local one.
fn client_build_error(e: reqwest::Error) -> Error {
    Error::configuration_with_context(
        format!("failed to build HTTP client: {}", e),
        ErrorContext::new().with_source("http_transport"),
    )
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// True when the failure was the per-request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_code::ErrorKind;

    fn reqwest_builder_error() -> reqwest::Error {
        // A relative URL is rejected while building, without touching the network.
        reqwest::Client::new()
            .get("relative/path")
            .build()
            .unwrap_err()
    }

    #[test]
    fn client_build_failure_is_local() {
        let err = client_build_error(reqwest_builder_error());
        assert!(matches!(err, Error::Configuration { .. }), "{err:?}");
        assert_eq!(err.kind(), ErrorKind::Local);
        assert!(!err.kind().retryable());
        assert!(err.to_string().contains("failed to build HTTP client"));
    }

    #[test]
    fn invalid_proxy_is_configuration_error() {
        let mut config = ClientConfig::new("https://api.relaywarden.eu/api/v1", "t");
        config.proxy_url = Some("http://exa mple:3128".to_string());
        let err = HttpTransport::new(&config).err().expect("proxy should be rejected");
        assert_eq!(err.kind(), ErrorKind::Local);
    }
}
