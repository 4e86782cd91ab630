use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use walkdir::WalkDir;

/// Walk `base_dir` and return every non-directory entry named `file_name`
/// that sits at least one directory below it, in traversal order. Symlinks
/// are listed but not descended into.
///
/// A file with that name directly inside `base_dir` is the merge output and
/// is never returned. Unreadable subdirectories are skipped with a warning;
/// an unreadable `base_dir` is an error.
pub fn find_candidates(base_dir: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| format!("scanning {}", base_dir.display()));
            }
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        // depth 1 is the base directory's own listing
        if entry.depth() < 2 || entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }
        if entry.file_name() == file_name {
            debug!("Candidate: {}", entry.path().display());
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}
