//! PDF to CSV conversion module
//!
//! This module contains the extractor seam, single-file conversion, batch
//! orchestration, configuration, and batch statistics.

pub mod batch;
pub mod cancel;
pub mod config;
pub mod engine;
pub mod extractor;
pub mod stats;

pub use batch::{convert_all, convert_all_with_cancel, plan_jobs};
pub use cancel::CancellationToken;
pub use config::{ConversionConfig, ExtractorConfig};
pub use engine::ConversionEngine;
pub use extractor::{TableExtractor, TabulaExtractor};
pub use stats::{BatchSummary, FileOutcome, FileStatus};

/// Result type for conversion operations
pub use crate::error::ConversionResult;
