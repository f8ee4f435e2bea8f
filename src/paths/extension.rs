use std::fmt;
use std::path::Path;

use crate::error::{ConversionError, ConversionResult};

/// A canonical file extension: lowercase with exactly one leading dot, e.g. `.pdf`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// Accepts `pdf`, `.pdf`, `PDF` or `.PDF` and produces `.pdf`.
    pub fn parse(raw: &str) -> ConversionResult<Self> {
        if raw.is_empty() {
            return Err(ConversionError::invalid_argument(
                "file extension must not be empty",
            ));
        }

        let dotted = if raw.starts_with('.') {
            raw.to_string()
        } else {
            format!(".{}", raw)
        };

        Ok(Self(dotted.to_lowercase()))
    }

    /// Case-insensitive suffix match against the whole path string
    pub fn matches(&self, path: &Path) -> bool {
        path.to_string_lossy().to_lowercase().ends_with(&self.0)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize a raw extension string, failing on empty input
pub fn canonicalize_extension(raw: &str) -> ConversionResult<String> {
    Extension::parse(raw).map(|ext| ext.0)
}

/// Return true if `path` ends with the canonical form of `raw`, ignoring case
pub fn has_extension(path: &Path, raw: &str) -> ConversionResult<bool> {
    Ok(Extension::parse(raw)?.matches(path))
}

/// File name with directories and the final extension removed.
///
/// `/a/b/report.v2.pdf` becomes `report.v2`; dot-files such as `.hidden` keep their name.
pub fn strip_path_and_extension(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
