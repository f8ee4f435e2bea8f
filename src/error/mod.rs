//! Error types and handling infrastructure for PDF to CSV conversion

use std::path::{Path, PathBuf};

/// Core error kinds for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Table extraction failed for {}: {message}", path.display())]
    ExtractionFailed { path: PathBuf, message: String },

    #[error("Timeout exceeded after {timeout_secs}s converting {}", path.display())]
    TimeoutExceeded { path: PathBuf, timeout_secs: u64 },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn extraction_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("{kind}")]
    Conversion { kind: ConversionErrorKind },

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ConversionErrorKind> for ConversionError {
    fn from(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind }
    }
}

impl ConversionError {
    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::conversion(ConversionErrorKind::invalid_argument(message))
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The structured kind, if this error carries one
    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind } => Some(kind),
            _ => None,
        }
    }

    /// True for failures caused by bad arguments rather than by the extractor or the filesystem
    pub fn is_precondition(&self) -> bool {
        matches!(
            self.kind(),
            Some(
                ConversionErrorKind::InvalidArgument { .. }
                    | ConversionErrorKind::NotADirectory { .. }
                    | ConversionErrorKind::NotFound { .. }
                    | ConversionErrorKind::Configuration { .. }
            )
        )
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Conversion { kind } => match kind {
                ConversionErrorKind::NotADirectory { path } => {
                    format!("'{}' is not an existing directory", path.display())
                }
                ConversionErrorKind::NotFound { path } => {
                    format!("'{}' does not exist", path.display())
                }
                ConversionErrorKind::ExtractionFailed { path, message } => {
                    let message = message.trim();
                    if message.is_empty() {
                        format!("Could not extract tables from {}", path.display())
                    } else {
                        format!("Could not extract tables from {}: {}", path.display(), message)
                    }
                }
                ConversionErrorKind::TimeoutExceeded { path, timeout_secs } => {
                    format!(
                        "Extractor did not finish {} within {} seconds",
                        path.display(),
                        timeout_secs
                    )
                }
                _ => kind.to_string(),
            },
            Self::Io { path, source } => {
                format!("Filesystem error at {}: {}", path.display(), source)
            }
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
