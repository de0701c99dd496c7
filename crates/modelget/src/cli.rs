use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

/// Check that the model files exist locally and download the missing ones.
#[derive(Debug, Parser)]
#[command(name = "modelget", version, about)]
pub struct Cli {
    /// Path of the weight (onnx) file.
    #[arg(long, default_value = "yolox_s.opt.onnx")]
    pub weight: PathBuf,

    /// Path of the descriptor (prototxt) file.
    #[arg(long, default_value = "yolox_s.opt.onnx.prototxt")]
    pub model: PathBuf,

    /// Skip the descriptor file entirely.
    #[arg(long, conflicts_with = "model")]
    pub no_model: bool,

    /// Remote base URL the artifacts are hosted under, keyed by file name.
    #[arg(long, default_value = "https://storage.googleapis.com/ailia-models/yolox/")]
    pub url: Url,
}
