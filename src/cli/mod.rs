//! Command-line interface module

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::conversion::{ConversionConfig, ConversionResult, ExtractorConfig};
use crate::error::{ConversionError, ConversionErrorKind};
use crate::paths::strip_path_and_extension;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "pdf2csv")]
#[command(about = "Convert the tables in PDF files to CSV, mirroring the input directory layout")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input PDF file, or a directory searched recursively for PDFs
    #[arg()]
    pub input: PathBuf,

    /// Output CSV file, or an existing directory receiving the mirrored tree
    #[arg()]
    pub output: PathBuf,

    /// Path to the tabula-java jar with dependencies
    #[arg(long, env = "PDF2CSV_TABULA_JAR")]
    pub tabula_jar: Option<PathBuf>,

    /// Java executable used to run tabula
    #[arg(long, env = "PDF2CSV_JAVA", default_value = "java")]
    pub java: PathBuf,

    /// Extra argument passed to tabula (repeatable), e.g. --extractor-arg=--lattice
    #[arg(long = "extractor-arg", allow_hyphen_values = true)]
    pub extractor_args: Vec<String>,

    /// Per-file extraction timeout in seconds, 0 to wait forever (default: 300)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the planned conversions without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the batch summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with a failure status if any file failed to convert
    #[arg(long)]
    pub fail_on_error: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let timeout = match args.timeout {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => ConversionConfig::default().timeout,
        };

        let config = ConversionConfig {
            extractor: ExtractorConfig {
                java: args.java.clone(),
                jar: args.tabula_jar.clone(),
                extra_args: args.extractor_args.clone(),
            },
            timeout,
            ..ConversionConfig::default()
        };

        // Validate configuration
        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if the input names a directory to convert in bulk
    pub fn is_directory_mode(&self) -> bool {
        self.args.input.is_dir()
    }

    /// Output file for single-file mode. An existing directory receives `<stem>.csv`.
    pub fn single_output_path(&self) -> PathBuf {
        if self.args.output.is_dir() {
            let stem = strip_path_and_extension(&self.args.input);
            self.args.output.join(format!(
                "{}.{}",
                stem,
                self.conversion_config.output_extension.trim_start_matches('.')
            ))
        } else {
            self.args.output.clone()
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Display `path` relative to `root` when possible
    pub fn relative_display(path: &Path, root: &Path) -> String {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        path.strip_prefix(&root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }
}

/// Default `tracing` filter when `RUST_LOG` is unset
pub fn log_filter(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    match error.kind() {
        Some(ConversionErrorKind::Configuration { .. }) => {
            eprintln!("\nTip: Download tabula-java from https://github.com/tabulapdf/tabula-java/releases and pass it with --tabula-jar");
        }
        Some(ConversionErrorKind::TimeoutExceeded { .. }) => {
            eprintln!("\nTip: Use --timeout to increase the per-file time limit");
        }
        Some(ConversionErrorKind::NotFound { .. }) | Some(ConversionErrorKind::NotADirectory { .. }) => {
            eprintln!("\nTip: Both directories must exist before a batch conversion");
        }
        _ => {}
    }

    // Show usage hint
    eprintln!("\nTry 'pdf2csv --help' for usage information.");
}
