//! Fold per-locale `Localizable.xcstrings` files into one file at the
//! resources root, then remove the originals.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

pub mod cleaner;
pub mod locator;
pub mod merger;

pub const DEFAULT_BASE_DIR: &str = "MMEX/Resources/";
pub const DEFAULT_FILE_NAME: &str = "Localizable.xcstrings";

pub const COMPLETION_MESSAGE: &str = "Merge completed. Individual files and directories deleted.";

/// What a single run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub merged_files: usize,
    pub merged_bytes: usize,
    pub removed_files: usize,
    pub removed_dirs: usize,
}

/// Locate, merge, then clean. Stops at the first filesystem error.
pub fn run(base_dir: &Path, file_name: &str) -> Result<Summary> {
    let candidates = locator::find_candidates(base_dir, file_name)?;
    info!("Found {} candidate(s) under {:?}", candidates.len(), base_dir);

    let output = output_path(base_dir, file_name);
    let merged_bytes = merger::merge(&candidates, &output)?;
    info!("Wrote {} byte(s) to {:?}", merged_bytes, output);

    let cleaned = cleaner::clean(&candidates)?;

    Ok(Summary {
        merged_files: candidates.len(),
        merged_bytes,
        removed_files: cleaned.removed_files,
        removed_dirs: cleaned.removed_dirs,
    })
}

pub fn output_path(base_dir: &Path, file_name: &str) -> PathBuf {
    base_dir.join(file_name)
}
