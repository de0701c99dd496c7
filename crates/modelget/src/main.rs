use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use modelget_fetch::{Fetcher, ReqwestClient};
use tracing_subscriber::EnvFilter;

mod cli;
mod ui;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = cli::Cli::parse();
    let model_path = (!args.no_model).then_some(args.model.as_path());

    let tracker = Arc::new(ui::ProgressTracker::new());
    let sink = Arc::clone(&tracker);
    let fetcher = Fetcher::new(ReqwestClient::new()?)
        .on_progress(Arc::new(move |progress| sink.update(progress)));

    fetcher.ensure_present(&args.weight, model_path, &args.url)?;
    tracker.finish();
    Ok(())
}
