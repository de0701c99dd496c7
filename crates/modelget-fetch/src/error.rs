//! Error types for modelget-fetch.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-security failure (handshake or certificate).
    ///
    /// Kept separate from [`FetchError::Network`] so the plaintext
    /// fallback can key on this variant alone.
    #[error("TLS failure: {0}")]
    Tls(String),

    #[error("HTTP error {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("file I/O error: {0}")]
    Io(#[from] io::Error),
}
