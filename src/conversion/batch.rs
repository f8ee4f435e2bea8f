use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::conversion::cancel::CancellationToken;
use crate::conversion::config::ConversionConfig;
use crate::conversion::engine::ConversionEngine;
use crate::conversion::stats::{BatchSummary, FileOutcome};
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::paths::{derive_output_path, mirrored_output_path, ConversionJob};
use crate::scanner::directory::require_directory;
use crate::scanner::find_files_with_extension;

/// Convert every PDF under `input_root` into a CSV at the mirrored location under
/// `output_root`. Per-file failures are recorded in the summary and never abort the batch.
pub fn convert_all(
    engine: &ConversionEngine,
    input_root: &Path,
    output_root: &Path,
) -> ConversionResult<BatchSummary> {
    convert_all_with_cancel(engine, input_root, output_root, &CancellationToken::new())
}

/// Like [`convert_all`], checking `cancel` before each file. Files not reached are `skipped`.
pub fn convert_all_with_cancel(
    engine: &ConversionEngine,
    input_root: &Path,
    output_root: &Path,
    cancel: &CancellationToken,
) -> ConversionResult<BatchSummary> {
    require_directory(input_root)?;
    require_directory(output_root)?;

    let started = Instant::now();
    let config = engine.config();
    let files = find_files_with_extension(input_root, &config.input_extension)?;
    info!(
        input = %input_root.display(),
        output = %output_root.display(),
        files = files.len(),
        extractor = engine.extractor_name(),
        "starting batch conversion"
    );

    let mut summary = BatchSummary::new(input_root, output_root, files.len());
    let mut produced: HashSet<PathBuf> = HashSet::new();
    for file in &files {
        if cancel.is_cancelled() {
            summary.record(FileOutcome::skipped(file));
            continue;
        }

        let output = match derive_output_path(file, input_root, output_root, &config.output_extension) {
            Ok(output) => output,
            Err(e) => {
                warn!(input = %file.display(), error = %e, "could not prepare output path, continuing");
                summary.record(FileOutcome::failed(file, None, &e));
                continue;
            }
        };

        // Extension matching ignores case, so `a.pdf` and `a.PDF` both map to `a.csv`.
        if !produced.insert(output.clone()) {
            warn!(
                input = %file.display(),
                output = %output.display(),
                "output path already produced by another file, overwriting"
            );
        }

        match engine.convert_single(file, &output) {
            Ok(()) => summary.record(FileOutcome::converted(file, output)),
            Err(e) => {
                warn!(input = %file.display(), error = %e, "conversion failed, continuing");
                summary.record(FileOutcome::failed(file, Some(output), &e));
            }
        }
    }

    summary.finish(started.elapsed());
    info!(
        converted = summary.converted,
        failed = summary.failed,
        skipped = summary.skipped,
        "batch conversion finished"
    );
    Ok(summary)
}

/// Compute the conversion jobs for a tree without creating any output directories
pub fn plan_jobs(
    config: &ConversionConfig,
    input_root: &Path,
    output_root: &Path,
) -> ConversionResult<Vec<ConversionJob>> {
    require_directory(input_root)?;
    let output_ext = config
        .output_ext()
        .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

    find_files_with_extension(input_root, &config.input_extension)?
        .into_iter()
        .map(|input| {
            let output = mirrored_output_path(&input, input_root, output_root, &output_ext)?;
            Ok(ConversionJob::new(input, output))
        })
        .collect()
}
