//! Blocking model artifact downloads with progress callbacks.
//!
//! Checks whether a model's weight file and optional descriptor file are
//! already on disk and downloads each missing one from a remote bucket,
//! keyed by file name. A transfer that dies in the TLS layer is retried
//! exactly once over plaintext; every other failure propagates as-is.
//!
//! The network seam is the [`HttpClient`] trait: [`ReqwestClient`] is the
//! production implementation, tests substitute mocks.

mod client;
mod error;
mod fetch;
mod progress;

pub use client::{HttpBody, HttpClient, ReqwestClient};
pub use error::FetchError;
pub use fetch::Fetcher;
pub use progress::{Progress, ProgressFn};
