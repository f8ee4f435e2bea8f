//! PDF table to CSV converter
//!
//! Finds PDF files under a directory tree and converts the tables in each one to a
//! CSV file at the mirrored location under an output tree. Table extraction itself
//! is delegated to an external [`TableExtractor`], by default the tabula-java CLI.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod paths;
pub mod scanner;

use std::path::Path;

// Re-export commonly used types
pub use conversion::{
    convert_all, convert_all_with_cancel, plan_jobs, BatchSummary, CancellationToken,
    ConversionConfig, ConversionEngine, FileOutcome, FileStatus, TableExtractor, TabulaExtractor,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult};
pub use paths::{
    canonicalize_extension, derive_output_path, has_extension, strip_path_and_extension,
    ConversionJob, Extension,
};
pub use scanner::find_files_with_extension;

/// Convert every PDF under `input_dir` using tabula with the given configuration
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    config: &ConversionConfig,
) -> ConversionResult<BatchSummary> {
    let engine = ConversionEngine::new(config.clone())?;
    convert_all(&engine, input_dir, output_dir)
}

/// Convert a single PDF into a single CSV using tabula with the given configuration
pub fn convert_file(
    input_file: &Path,
    output_file: &Path,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    let engine = ConversionEngine::new(config.clone())?;
    engine.convert_single(input_file, output_file)
}
