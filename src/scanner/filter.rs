use std::path::Path;

use walkdir::DirEntry;

use crate::paths::Extension;

/// Return true if the entry is a regular file whose name carries `extension`.
/// Symlinks are not followed, so a link to a PDF is not a candidate.
pub fn is_candidate(entry: &DirEntry, extension: &Extension) -> bool {
    entry.file_type().is_file() && extension.matches(Path::new(entry.file_name()))
}
