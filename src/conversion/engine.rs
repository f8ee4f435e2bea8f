//! Single-file conversion on top of a [`TableExtractor`]

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::conversion::config::ConversionConfig;
use crate::conversion::extractor::{TableExtractor, TabulaExtractor};
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
    extractor: Box<dyn TableExtractor>,
}

impl std::fmt::Debug for ConversionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionEngine")
            .field("config", &self.config)
            .field("extractor", &self.extractor.name())
            .finish()
    }
}

impl ConversionEngine {
    /// Create an engine backed by the tabula-java CLI
    pub fn new(config: ConversionConfig) -> ConversionResult<Self> {
        let extractor = TabulaExtractor::new(config.extractor.clone(), config.timeout)?;
        Self::with_extractor(config, extractor)
    }

    /// Create an engine with a custom extractor
    pub fn with_extractor(
        config: ConversionConfig,
        extractor: impl TableExtractor + 'static,
    ) -> ConversionResult<Self> {
        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;
        Ok(Self {
            config,
            extractor: Box::new(extractor),
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    /// Convert one PDF into one CSV. All failures propagate to the caller.
    pub fn convert_single(&self, input: &Path, output: &Path) -> ConversionResult<()> {
        self.validate_job(input, output)?;

        // A leftover file from an earlier run must not pass the output check below.
        if output.exists() {
            debug!(output = %output.display(), "removing previous output");
            fs::remove_file(output).map_err(|e| ConversionError::io(output, e))?;
        }

        let start_time = Instant::now();
        self.extractor.extract(input, output)?;

        if !output.is_file() {
            return Err(ConversionError::conversion(
                ConversionErrorKind::extraction_failed(input, "extractor produced no output file"),
            ));
        }

        debug!(
            input = %input.display(),
            output = %output.display(),
            extractor = self.extractor.name(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "converted"
        );
        Ok(())
    }

    fn validate_job(&self, input: &Path, output: &Path) -> ConversionResult<()> {
        let config_err =
            |e: String| ConversionError::conversion(ConversionErrorKind::configuration(e));
        let input_ext = self.config.input_ext().map_err(config_err)?;
        let output_ext = self.config.output_ext().map_err(config_err)?;

        if !input_ext.matches(input) {
            return Err(ConversionError::invalid_argument(format!(
                "{} is not a {} file",
                input.display(),
                input_ext
            )));
        }
        if !input.is_file() {
            return Err(ConversionError::conversion(ConversionErrorKind::not_found(input)));
        }
        if !output_ext.matches(output) {
            return Err(ConversionError::invalid_argument(format!(
                "{} does not specify a {} file",
                output.display(),
                output_ext
            )));
        }
        Ok(())
    }
}
