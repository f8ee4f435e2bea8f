//! Configuration options for PDF to CSV conversion

use std::path::PathBuf;
use std::time::Duration;

use crate::paths::Extension;

/// How to launch the tabula-java command line extractor
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Java executable
    pub java: PathBuf,
    /// Path to the tabula-java jar (`tabula-<version>-jar-with-dependencies.jar`)
    pub jar: Option<PathBuf>,
    /// Extra arguments placed before the input file, e.g. `--lattice`
    pub extra_args: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            java: PathBuf::from("java"),
            jar: None,
            extra_args: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Validate that the extractor can be launched
    pub fn validate(&self) -> Result<(), String> {
        if self.java.as_os_str().is_empty() {
            return Err("Java executable must not be empty".to_string());
        }

        match &self.jar {
            None => Err(
                "No tabula jar configured; pass --tabula-jar or set PDF2CSV_TABULA_JAR".to_string(),
            ),
            Some(jar) if !jar.is_file() => {
                Err(format!("Tabula jar not found: {}", jar.display()))
            }
            Some(_) => Ok(()),
        }
    }
}

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// External extractor invocation
    pub extractor: ExtractorConfig,
    /// Per-file extractor timeout; `None` waits forever
    pub timeout: Option<Duration>,
    /// Extension of files picked up from the input tree
    pub input_extension: String,
    /// Extension given to produced files
    pub output_extension: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            timeout: Some(Duration::from_secs(300)), // 5 minutes
            input_extension: "pdf".to_string(),
            output_extension: "csv".to_string(),
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jar(mut self, jar: impl Into<PathBuf>) -> Self {
        self.extractor.jar = Some(jar.into());
        self
    }

    pub fn with_java(mut self, java: impl Into<PathBuf>) -> Self {
        self.extractor.java = java.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Canonical input extension
    pub fn input_ext(&self) -> Result<Extension, String> {
        Extension::parse(&self.input_extension).map_err(|e| e.to_string())
    }

    /// Canonical output extension
    pub fn output_ext(&self) -> Result<Extension, String> {
        Extension::parse(&self.output_extension).map_err(|e| e.to_string())
    }

    /// Validate configuration values that do not depend on the extractor
    pub fn validate(&self) -> Result<(), String> {
        let input = self.input_ext()?;
        let output = self.output_ext()?;
        if input == output {
            return Err(format!(
                "Input and output extensions must differ (both are {})",
                input
            ));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
