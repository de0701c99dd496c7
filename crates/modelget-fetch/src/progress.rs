use std::sync::Arc;

/// Snapshot of a single transfer, passed to progress callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Bytes written to the destination file so far.
    pub bytes_downloaded: u64,

    /// Total expected bytes, if known from the Content-Length header.
    ///
    /// `None` when the server uses chunked encoding or omits the header.
    pub total_bytes: Option<u64>,
}

/// Callback invoked after each chunk of a transfer is written.
pub type ProgressFn = Arc<dyn Fn(&Progress) + Send + Sync>;

impl Progress {
    /// Completion percentage, clamped to 100.
    ///
    /// Returns `None` while the total size is unknown. A zero-length
    /// target reports 100 immediately.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        self.total_bytes.map(|total| {
            if total == 0 {
                100.0
            } else {
                (self.bytes_downloaded as f64 / total as f64 * 100.0).min(100.0)
            }
        })
    }
}
