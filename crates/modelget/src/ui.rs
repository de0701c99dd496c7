use indicatif::{ProgressBar, ProgressStyle};
use modelget_fetch::Progress;
use once_cell::sync::Lazy;

const PB_STYLE: &str = "[{bar:50} {percent:>3}% ( {total_bytes} )]";

// '=' fill with a '>' head, padded with spaces.
const PB_CHARS: &str = "=> ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(PB_STYLE)
        .ok()
        .map(|style| style.progress_chars(PB_CHARS))
});

/// Console progress bar fed by the fetcher's progress callback.
pub struct ProgressTracker {
    pb: ProgressBar,
}

impl ProgressTracker {
    pub fn new() -> Self {
        let pb = ProgressBar::no_length();
        if let Some(style) = PB_TEMPLATE.as_ref() {
            pb.set_style(style.clone());
        }
        ProgressTracker { pb }
    }

    /// Mirror a transfer snapshot onto the bar, overwriting the line.
    pub fn update(&self, progress: &Progress) {
        if let Some(total) = progress.total_bytes {
            self.pb.set_length(total);
            self.pb.set_position(progress.bytes_downloaded.min(total));
        } else {
            self.pb.set_position(progress.bytes_downloaded);
        }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
