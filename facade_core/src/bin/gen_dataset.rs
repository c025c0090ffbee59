//! Generate the seed dataset snapshot from the reference profiles.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-dataset [output-path]
//! ```
//!
//! The default output path is `data/system_dataset.json`, relative to the
//! working directory. The parent directory is created if needed.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use facade_core::dataset::build_dataset;
use facade_core::snapshot::save_dataset;

const DEFAULT_OUTPUT: &str = "data/system_dataset.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!(path = %parent.display(), "failed to create output directory: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let dataset = match build_dataset(None) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("failed to build dataset: {e}");
            return ExitCode::FAILURE;
        }
    };

    match save_dataset(&dataset, &output_path) {
        Ok(()) => {
            info!(path = %output_path.display(), "dataset generated");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(path = %output_path.display(), "failed to save dataset: {e}");
            ExitCode::FAILURE
        }
    }
}
