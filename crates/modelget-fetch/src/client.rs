use std::error::Error as StdError;
use std::io::Read;

use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::FetchError;

/// Response body handed back by [`HttpClient::get`].
pub struct HttpBody {
    /// Streaming body reader.
    pub reader: Box<dyn Read>,

    /// Content-Length, when the server provides one.
    pub content_length: Option<u64>,
}

/// Blocking HTTP client abstraction.
///
/// [`ReqwestClient`] is the production implementation; tests substitute
/// mock implementations to observe requests or inject failures.
pub trait HttpClient {
    /// Issue a GET and return the response body as a streaming reader.
    ///
    /// # Errors
    ///
    /// Implementations must map transport-security failures to
    /// [`FetchError::Tls`] and non-success statuses to
    /// [`FetchError::HttpStatus`]; everything else is
    /// [`FetchError::Network`].
    fn get(&self, url: &Url) -> Result<HttpBody, FetchError>;
}

/// Production HTTP client backed by `reqwest::blocking`.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Create a client with default transport configuration.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &Url) -> Result<HttpBody, FetchError> {
        let response = self.client.get(url.clone()).send().map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let content_length = response.content_length();
        Ok(HttpBody {
            reader: Box::new(response),
            content_length,
        })
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if chain_has_tls_failure(&err) {
        FetchError::Tls(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}

/// Walk the source chain looking for the TLS layer.
///
/// reqwest does not expose a TLS error kind, and downcasting to the
/// backend's concrete error type breaks on a version skew, so this matches
/// on the failure text instead.
fn chain_has_tls_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut cause = err.source();
    while let Some(e) = cause {
        let msg = e.to_string().to_ascii_lowercase();
        if msg.contains("tls") || msg.contains("certificate") || msg.contains("handshake") {
            return true;
        }
        cause = e.source();
    }
    false
}
