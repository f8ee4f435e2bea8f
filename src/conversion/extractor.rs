//! The external table extractor that turns one PDF into one CSV

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::conversion::config::ExtractorConfig;
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const STDERR_TAIL_LINES: usize = 10;

/// Produces a CSV file at `output` from the tables found on every page of `input`.
pub trait TableExtractor {
    /// Short name used in log lines
    fn name(&self) -> &str;

    fn extract(&self, input: &Path, output: &Path) -> ConversionResult<()>;
}

/// Runs the tabula-java CLI once per file:
/// `java -jar <jar> --silent --format CSV --pages all --outfile <output> <input>`
#[derive(Debug, Clone)]
pub struct TabulaExtractor {
    config: ExtractorConfig,
    timeout: Option<Duration>,
}

impl TabulaExtractor {
    pub fn new(config: ExtractorConfig, timeout: Option<Duration>) -> ConversionResult<Self> {
        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;
        Ok(Self { config, timeout })
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.config.java);
        if let Some(jar) = &self.config.jar {
            cmd.arg("-jar").arg(jar);
        }
        cmd.args(["--silent", "--format", "CSV", "--pages", "all"])
            .args(&self.config.extra_args)
            .arg("--outfile")
            .arg(output)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd
    }
}

impl TableExtractor for TabulaExtractor {
    fn name(&self) -> &str {
        "tabula"
    }

    fn extract(&self, input: &Path, output: &Path) -> ConversionResult<()> {
        let mut cmd = self.command(input, output);
        debug!(command = ?cmd, "launching extractor");

        let mut child = cmd.spawn().map_err(|e| {
            ConversionError::conversion(ConversionErrorKind::extraction_failed(
                input,
                format!("failed to launch {}: {}", self.config.java.display(), e),
            ))
        })?;

        // Drained on a separate thread so a chatty extractor cannot fill the pipe and stall.
        let stderr = child.stderr.take();
        let reader = thread::spawn(move || {
            let mut buf = Vec::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_end(&mut buf);
            }
            String::from_utf8_lossy(&buf).into_owned()
        });

        let status = wait_with_timeout(&mut child, self.timeout)
            .map_err(|e| ConversionError::io(input, e))?;

        match status {
            // Not joined: a process started by a launcher script may still hold the pipe.
            None => Err(ConversionError::conversion(
                ConversionErrorKind::TimeoutExceeded {
                    path: input.to_path_buf(),
                    timeout_secs: self.timeout.map(|t| t.as_secs()).unwrap_or_default(),
                },
            )),
            Some(status) if status.success() => Ok(()),
            Some(status) => {
                let stderr = reader.join().unwrap_or_default();
                Err(ConversionError::conversion(
                    ConversionErrorKind::extraction_failed(
                        input,
                        format!("extractor exited with {}: {}", status, stderr_tail(&stderr)),
                    ),
                ))
            }
        }
    }
}

/// Wait for `child`, killing it once `timeout` elapses. `Ok(None)` means it was killed.
fn wait_with_timeout(child: &mut Child, timeout: Option<Duration>) -> std::io::Result<Option<ExitStatus>> {
    let Some(timeout) = timeout else {
        return child.wait().map(Some);
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
