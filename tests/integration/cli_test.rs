//! Integration tests for the pdf2csv binary

#[path = "../common/mod.rs"]
mod common;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run_pdf2csv(args: &[&Path], flags: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdf2csv"))
        .args(args)
        .args(flags)
        .env_remove("PDF2CSV_TABULA_JAR")
        .env_remove("PDF2CSV_JAVA")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run pdf2csv")
}

#[test]
fn test_dry_run_lists_jobs_without_writing() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    common::touch_all(input.path(), &["x/y/report.pdf", "x/readme.md"]);

    let out = run_pdf2csv(&[input.path(), output.path()], &["--dry-run"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("report.csv"), "stdout: {}", stdout);
    assert!(stdout.contains("1 PDF files would be converted"));
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_output_directory_fails() {
    let input = tempdir().unwrap();
    common::touch_all(input.path(), &["a.pdf"]);
    let missing = input.path().join("no-such-dir");

    let out = run_pdf2csv(&[input.path(), missing.as_path()], &["--dry-run"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not exist"));
    assert!(!missing.exists());
}

#[test]
fn test_missing_jar_is_reported() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    common::touch_all(input.path(), &["a.pdf"]);

    let out = run_pdf2csv(&[input.path(), output.path()], &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--tabula-jar"));
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[cfg(unix)]
mod with_fake_tabula {
    use super::*;
    use pdf2csv::BatchSummary;

    fn tool_flags(tools: &Path) -> Vec<String> {
        let (java, jar) = common::install_fake_tabula(tools);
        vec![
            format!("--java={}", java.display()),
            format!("--tabula-jar={}", jar.display()),
        ]
    }

    #[test]
    fn test_directory_conversion_continues_past_errors() {
        let tools = tempdir().unwrap();
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        common::touch_all(input.path(), &["good.pdf", "broken.pdf", "nested/also-good.pdf"]);

        let flags = tool_flags(tools.path());
        let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
        let out = run_pdf2csv(&[input.path(), output.path()], &flags);

        assert!(out.status.success());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("broken.pdf"), "stderr: {}", stderr);
        assert!(output.path().join("good.csv").is_file());
        assert!(output.path().join("nested/also-good.csv").is_file());
        assert!(!output.path().join("broken.csv").exists());
    }

    #[test]
    fn test_fail_on_error_sets_exit_status() {
        let tools = tempdir().unwrap();
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        common::touch_all(input.path(), &["good.pdf", "broken.pdf"]);

        let mut flags = tool_flags(tools.path());
        flags.push("--fail-on-error".to_string());
        let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
        let out = run_pdf2csv(&[input.path(), output.path()], &flags);

        assert_eq!(out.status.code(), Some(1));
        assert!(output.path().join("good.csv").is_file());
    }

    #[test]
    fn test_json_summary() {
        let tools = tempdir().unwrap();
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        common::touch_all(input.path(), &["a.pdf", "b/broken.pdf"]);

        let mut flags = tool_flags(tools.path());
        flags.push("--json".to_string());
        let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
        let out = run_pdf2csv(&[input.path(), output.path()], &flags);

        assert!(out.status.success());
        let summary = BatchSummary::from_json(&String::from_utf8_lossy(&out.stdout)).unwrap();
        assert_eq!(summary.discovered, 2);
        assert_eq!(summary.converted, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_single_file_failure_propagates() {
        let tools = tempdir().unwrap();
        let input = tempdir().unwrap();
        common::touch_all(input.path(), &["broken.pdf"]);

        let flags = tool_flags(tools.path());
        let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
        let pdf = input.path().join("broken.pdf");
        let csv = input.path().join("broken.csv");
        let out = run_pdf2csv(&[pdf.as_path(), csv.as_path()], &flags);

        assert!(!out.status.success());
        assert!(String::from_utf8_lossy(&out.stderr).contains("could not parse"));
    }

    #[test]
    fn test_single_file_into_directory() {
        let tools = tempdir().unwrap();
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        common::touch_all(input.path(), &["Invoice.PDF"]);

        let flags = tool_flags(tools.path());
        let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
        let pdf = input.path().join("Invoice.PDF");
        let out = run_pdf2csv(&[pdf.as_path(), output.path()], &flags);

        assert!(out.status.success());
        assert!(output.path().join("Invoice.csv").is_file());
    }

    #[test]
    fn test_warnings_logged_by_default_and_hidden_when_quiet() {
        let tools = tempdir().unwrap();
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        common::touch_all(input.path(), &["good.pdf", "broken.pdf"]);

        let flags = tool_flags(tools.path());
        let mut flags: Vec<&str> = flags.iter().map(String::as_str).collect();
        let out = run_pdf2csv(&[input.path(), output.path()], &flags);
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("conversion failed, continuing"), "stderr: {}", stderr);

        flags.push("--quiet");
        let out = run_pdf2csv(&[input.path(), output.path()], &flags);
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(!stderr.contains("conversion failed, continuing"), "stderr: {}", stderr);
        assert!(stderr.contains("broken.pdf"), "stderr: {}", stderr);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_duplicate_output_path_is_warned() {
        let tools = tempdir().unwrap();
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        common::touch_all(input.path(), &["a.pdf", "a.PDF"]);

        let flags = tool_flags(tools.path());
        let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
        let out = run_pdf2csv(&[input.path(), output.path()], &flags);

        assert!(out.status.success());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(
            stderr.contains("output path already produced by another file"),
            "stderr: {}",
            stderr
        );
        assert!(output.path().join("a.csv").is_file());
    }
}
