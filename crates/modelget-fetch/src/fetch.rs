use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use reqwest::Url;
use tracing::{debug, info, warn};

use crate::client::HttpClient;
use crate::error::FetchError;
use crate::progress::{Progress, ProgressFn};

const CHUNK_SIZE: usize = 8 * 1024;

/// Downloads model artifacts that are not already on disk.
pub struct Fetcher<C: HttpClient> {
    client: C,
    on_progress: Option<ProgressFn>,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            on_progress: None,
        }
    }

    /// Install a callback invoked after each chunk of a transfer.
    #[must_use]
    pub fn on_progress(mut self, callback: ProgressFn) -> Self {
        self.on_progress = Some(callback);
        self
    }

    /// Ensure the weight file and optional descriptor file exist locally,
    /// downloading each missing one from `remote_base + file name`.
    ///
    /// Targets already on disk are skipped without touching the network.
    /// The first transfer error aborts the run; remaining targets are not
    /// attempted and no partial file is cleaned up.
    pub fn ensure_present(
        &self,
        weight_path: &Path,
        model_path: Option<&Path>,
        remote_base: &Url,
    ) -> Result<(), FetchError> {
        if weight_path.exists() {
            debug!(path = %weight_path.display(), "weight file already present");
        } else {
            info!(save_path = %weight_path.display(), "downloading weight file");
            self.download(&remote_url_for(remote_base, weight_path)?, weight_path)?;
        }

        if let Some(model_path) = model_path {
            if model_path.exists() {
                debug!(path = %model_path.display(), "descriptor file already present");
            } else {
                info!(save_path = %model_path.display(), "downloading descriptor file");
                self.download(&remote_url_for(remote_base, model_path)?, model_path)?;
            }
        }

        info!("weight and descriptor files are prepared");
        Ok(())
    }

    /// Transfer one file, retrying exactly once over plaintext if the
    /// encrypted attempt dies in the TLS layer. Any other failure, and any
    /// failure of the plaintext retry itself, propagates.
    fn download(&self, url: &Url, dest: &Path) -> Result<(), FetchError> {
        match self.transfer(url, dest) {
            Err(FetchError::Tls(reason)) if url.scheme() == "https" => {
                warn!(%url, %reason, "TLS failure, retrying over plaintext");
                let mut insecure = url.clone();
                insecure
                    .set_scheme("http")
                    .map_err(|()| FetchError::InvalidUrl(url.to_string()))?;
                self.transfer(&insecure, dest)
            }
            result => result,
        }
    }

    fn transfer(&self, url: &Url, dest: &Path) -> Result<(), FetchError> {
        let mut body = self.client.get(url)?;
        let mut file = File::create(dest)?;
        let mut buf = [0u8; CHUNK_SIZE];
        let mut bytes_downloaded = 0u64;

        loop {
            let n = body.reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
            bytes_downloaded += n as u64;
            if let Some(callback) = &self.on_progress {
                callback(&Progress {
                    bytes_downloaded,
                    total_bytes: body.content_length,
                });
            }
        }

        info!(%url, bytes = bytes_downloaded, "download complete");
        Ok(())
    }
}

/// Build the remote URL for a local target: the base with the target's
/// file name appended, matching how the artifacts are keyed in the bucket.
fn remote_url_for(base: &Url, local: &Path) -> Result<Url, FetchError> {
    let name = local
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FetchError::InvalidUrl(local.display().to_string()))?;
    Url::parse(&format!("{base}{name}")).map_err(|e| FetchError::InvalidUrl(e.to_string()))
}
