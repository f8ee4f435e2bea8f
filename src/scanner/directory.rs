use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use crate::paths::mapping::absolute;
use crate::paths::Extension;
use crate::scanner::filter::is_candidate;

/// Check that `dir` exists and is a directory
pub fn require_directory(dir: &Path) -> ConversionResult<()> {
    if !dir.exists() {
        return Err(ConversionError::conversion(ConversionErrorKind::not_found(dir)));
    }
    if !dir.is_dir() {
        return Err(ConversionError::conversion(
            ConversionErrorKind::not_a_directory(dir),
        ));
    }
    Ok(())
}

/// Find every regular file under `root_dir` (recursively, root included) whose
/// name ends with `extension`, ignoring case. Returned paths are absolute and sorted.
///
/// Entries that cannot be read, such as permission-denied subdirectories, are
/// logged and skipped rather than failing the scan.
pub fn find_files_with_extension(root_dir: &Path, extension: &str) -> ConversionResult<Vec<PathBuf>> {
    let extension = Extension::parse(extension)?;
    require_directory(root_dir)?;
    let root = absolute(root_dir)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if is_candidate(&entry, &extension) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(root = %root.display(), count = files.len(), extension = %extension, "scan finished");
    Ok(files)
}
