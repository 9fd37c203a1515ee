//! Staging of source files into the output tree.

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Make `src` available at `dst`, creating parent directories as needed.
///
/// Prefers a hardlink; falls back to a full copy when the filesystem
/// refuses (cross-device link, permissions). The copy is written to a
/// temporary sibling and renamed into place, so `dst` either exists with
/// full content or not at all. A pre-existing `dst` is replaced, keeping
/// re-runs idempotent.
pub fn stage_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }

    if dst.exists() {
        fs::remove_file(dst)?;
    }

    match fs::hard_link(src, dst) {
        Ok(()) => {
            debug!(src = %src.display(), dst = %dst.display(), "Staged via hardlink");
            Ok(())
        }
        Err(link_err) => {
            let tmp = dst.with_extension("staging");
            if let Err(copy_err) = fs::copy(src, &tmp).and_then(|_| fs::rename(&tmp, dst)) {
                let _ = fs::remove_file(&tmp);
                return Err(copy_err.into());
            }
            debug!(
                src = %src.display(),
                dst = %dst.display(),
                reason = %link_err,
                "Staged via copy fallback"
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stage_creates_parents_and_file() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("fig.svg");
        fs::write(&src, "<svg/>").unwrap();

        let dst = temp.path().join("out").join("sub-01").join("fig.svg");
        stage_file(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "<svg/>");
    }

    #[test]
    fn test_stage_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("fig.svg");
        fs::write(&src, "<svg/>").unwrap();

        let dst = temp.path().join("out").join("fig.svg");
        stage_file(&src, &dst).unwrap();
        stage_file(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "<svg/>");
    }

    #[test]
    fn test_stage_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("absent.svg");
        let dst = temp.path().join("out").join("absent.svg");

        assert!(stage_file(&src, &dst).is_err());
        assert!(!dst.exists());
    }
}
