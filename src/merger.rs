use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

/// Provenance line written ahead of each merged block.
pub fn marker(source: &Path) -> String {
    format!("// From {}\n", source.display())
}

/// Concatenate `candidates` into `output`, each block preceded by its marker
/// and followed by exactly one `\n`. Content is copied verbatim, so the blank
/// line between blocks only appears when a source already ends in a newline.
///
/// With no candidates an existing `output` is left as it is rather than
/// truncated, which keeps a second run over a merged tree from changing it.
/// Returns the number of bytes written.
pub fn merge(candidates: &[PathBuf], output: &Path) -> Result<usize> {
    if candidates.is_empty() && output.exists() {
        info!("Nothing to merge, keeping {}", output.display());
        return Ok(0);
    }

    let file = File::create(output).with_context(|| format!("creating {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;

    for path in candidates {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let header = marker(path);

        write_block(&mut writer, &header, &content)
            .with_context(|| format!("writing {}", output.display()))?;

        written += header.len() + content.len() + 1;
        debug!("Merged {} ({} bytes)", path.display(), content.len());
    }

    writer
        .flush()
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(written)
}

fn write_block(writer: &mut impl Write, header: &str, content: &str) -> std::io::Result<()> {
    writer.write_all(header.as_bytes())?;
    writer.write_all(content.as_bytes())?;
    writer.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, body: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn concatenates_with_markers_in_order() {
        let tmp = TempDir::new().unwrap();
        let en = write(tmp.path(), "en/L.xcstrings", "\"A\"");
        let fr = write(tmp.path(), "fr/L.xcstrings", "\"B\"\n");
        let out = tmp.path().join("L.xcstrings");

        let written = merge(&[en.clone(), fr.clone()], &out).unwrap();

        let expected = format!(
            "// From {}\n\"A\"\n// From {}\n\"B\"\n\n",
            en.display(),
            fr.display()
        );
        assert_eq!(fs::read_to_string(&out).unwrap(), expected);
        assert_eq!(written, expected.len());
    }

    #[test]
    fn truncates_previous_output() {
        let tmp = TempDir::new().unwrap();
        let en = write(tmp.path(), "en/L.xcstrings", "new");
        let out = write(tmp.path(), "L.xcstrings", "stale content that is long");

        merge(&[en.clone()], &out).unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            format!("// From {}\nnew\n", en.display())
        );
    }

    #[test]
    fn no_candidates_keeps_existing_output() {
        let tmp = TempDir::new().unwrap();
        let out = write(tmp.path(), "L.xcstrings", "already merged");

        assert_eq!(merge(&[], &out).unwrap(), 0);
        assert_eq!(fs::read_to_string(&out).unwrap(), "already merged");
    }

    #[test]
    fn no_candidates_creates_empty_output() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("L.xcstrings");

        merge(&[], &out).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "");
    }

    #[test]
    fn unreadable_candidate_fails() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("L.xcstrings");
        let missing = tmp.path().join("en/L.xcstrings");

        let err = merge(&[missing], &out).unwrap_err();

        assert!(format!("{err:#}").contains("reading"));
    }
}
