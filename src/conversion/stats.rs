//! Per-file outcomes and batch totals

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConversionError;

/// What happened to one discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Converted,
    Failed,
    /// Not attempted because the batch was cancelled
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    /// Absent when the output path could not be derived
    pub output: Option<PathBuf>,
    pub status: FileStatus,
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn converted(input: &Path, output: PathBuf) -> Self {
        Self {
            input: input.to_path_buf(),
            output: Some(output),
            status: FileStatus::Converted,
            error: None,
        }
    }

    pub fn failed(input: &Path, output: Option<PathBuf>, error: &ConversionError) -> Self {
        Self {
            input: input.to_path_buf(),
            output,
            status: FileStatus::Failed,
            error: Some(error.user_message()),
        }
    }

    pub fn skipped(input: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            output: None,
            status: FileStatus::Skipped,
            error: None,
        }
    }
}

/// Result of a whole batch run. A batch only fails outright on bad roots;
/// everything else lands here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    /// Number of matching files found by the scan
    pub discovered: usize,
    pub converted: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Wall time for the whole batch in milliseconds
    pub processing_time_ms: u64,
    pub outcomes: Vec<FileOutcome>,
    /// Timestamp of when the batch finished
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl BatchSummary {
    pub fn new(input_root: &Path, output_root: &Path, discovered: usize) -> Self {
        Self {
            input_root: input_root.to_path_buf(),
            output_root: output_root.to_path_buf(),
            discovered,
            converted: 0,
            failed: 0,
            skipped: 0,
            processing_time_ms: 0,
            outcomes: Vec::with_capacity(discovered),
            collected_at: chrono::Utc::now(),
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome.status {
            FileStatus::Converted => self.converted += 1,
            FileStatus::Failed => self.failed += 1,
            FileStatus::Skipped => self.skipped += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    /// True when every discovered file was converted
    pub fn is_complete_success(&self) -> bool {
        self.converted == self.discovered
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == FileStatus::Failed)
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        let mut line = format!("Converted {} of {} PDF files", self.converted, self.discovered);
        if self.failed > 0 {
            line.push_str(&format!(", {} failed", self.failed));
        }
        if self.skipped > 0 {
            line.push_str(&format!(", {} skipped", self.skipped));
        }
        line
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
