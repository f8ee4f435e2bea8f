use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConversionError, ConversionResult};
use crate::paths::extension::{strip_path_and_extension, Extension};

/// One discovered input file paired with the output file it converts into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }
}

/// Map an input file into an output file path without touching the filesystem.
/// This preserves the input directory structure relative to `input_root`.
pub fn mirrored_output_path(
    input_file: &Path,
    input_root: &Path,
    output_root: &Path,
    new_extension: &Extension,
) -> ConversionResult<PathBuf> {
    let input_file = absolute(input_file)?;
    let input_root = absolute(input_root)?;

    let relative = input_file.strip_prefix(&input_root).map_err(|_| {
        ConversionError::invalid_argument(format!(
            "{} is not inside {}",
            input_file.display(),
            input_root.display()
        ))
    })?;

    let base_name = strip_path_and_extension(relative);
    if base_name.is_empty() {
        return Err(ConversionError::invalid_argument(format!(
            "{} does not name a file below {}",
            input_file.display(),
            input_root.display()
        )));
    }

    let dest_dir = match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => output_root.join(parent),
        _ => output_root.to_path_buf(),
    };

    Ok(dest_dir.join(format!("{}{}", base_name, new_extension)))
}

/// Map an input file into an output file path and create its parent directories.
/// Directory creation is idempotent, so files sharing a destination never collide.
pub fn derive_output_path(
    input_file: &Path,
    input_root: &Path,
    output_root: &Path,
    new_extension: &str,
) -> ConversionResult<PathBuf> {
    let extension = Extension::parse(new_extension)?;
    let output = mirrored_output_path(input_file, input_root, output_root, &extension)?;

    if let Some(dest_dir) = output.parent() {
        if !dest_dir.is_dir() {
            debug!(dir = %dest_dir.display(), "creating output directory");
            fs::create_dir_all(dest_dir).map_err(|e| ConversionError::io(dest_dir, e))?;
        }
    }

    Ok(output)
}

pub(crate) fn absolute(path: &Path) -> ConversionResult<PathBuf> {
    std::path::absolute(path).map_err(|e| ConversionError::io(path, e))
}
