//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Ensure a directory exists, creating it recursively if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// In-progress path for a download destination: the final name with a
/// `.tmp` suffix appended (not substituted, so `ep1.mp4` becomes
/// `ep1.mp4.tmp`).
pub fn tmp_path(destination: &Path) -> PathBuf {
    let mut os = destination.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/downloads/show/ep1.mp4")),
            PathBuf::from("/downloads/show/ep1.mp4.tmp")
        );
    }

    #[test]
    fn test_ensure_dir_creates_recursively() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Already existing is fine.
        ensure_dir(&nested).unwrap();
    }
}
