use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cleaned {
    pub removed_files: usize,
    pub removed_dirs: usize,
}

/// Delete each merged file, then its parent directory once that is empty.
///
/// Only the immediate parent is ever removed. Any failed removal aborts the
/// loop; files already deleted stay deleted.
pub fn clean(candidates: &[PathBuf]) -> Result<Cleaned> {
    let mut cleaned = Cleaned::default();

    for file in candidates {
        if let Err(e) = make_writable(file) {
            warn!("Could not make {} writable: {e}", file.display());
        }
        fs::remove_file(file).with_context(|| format!("removing {}", file.display()))?;
        cleaned.removed_files += 1;
        debug!("Removed {}", file.display());

        let Some(folder) = file.parent() else {
            continue;
        };
        if is_empty_dir(folder)? {
            fs::remove_dir(folder)
                .with_context(|| format!("removing directory {}", folder.display()))?;
            cleaned.removed_dirs += 1;
            info!("Removed empty directory {}", folder.display());
        }
    }

    Ok(cleaned)
}

/// Add the owner write bit (unix) or drop the read-only flag (elsewhere).
pub fn make_writable(path: &Path) -> std::io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        perms.set_mode(perms.mode() | 0o200);
    }
    #[cfg(not(unix))]
    {
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
    }

    fs::set_permissions(path, perms)
}

fn is_empty_dir(dir: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    Ok(entries.next().is_none())
}
