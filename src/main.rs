use clap::Parser;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pdf2csv::cli::{handle_error, log_filter, Args, CliConfig, CliUtils};
use pdf2csv::conversion::{convert_all, plan_jobs, BatchSummary, ConversionEngine, FileStatus};
use pdf2csv::error::ConversionError;
use pdf2csv::scanner::directory::require_directory;

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    init_logging(args.verbose, args.quiet);

    let cli = match CliConfig::from_args(args) {
        Ok(cli) => cli,
        Err(e) => exit_with(&e),
    };

    let all_converted = if cli.is_directory_mode() {
        handle_directory(&cli)?
    } else {
        handle_file(&cli)?
    };

    if !all_converted && cli.args.fail_on_error {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = log_filter(verbose, quiet);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_with(error: &ConversionError) -> ! {
    handle_error(error);
    std::process::exit(2)
}

fn handle_file(cli: &CliConfig) -> Result<bool> {
    let input = &cli.args.input;
    let output = cli.single_output_path();

    if cli.args.dry_run {
        println!("{} -> {}", input.display(), output.display());
        return Ok(true);
    }

    let engine = ConversionEngine::new(cli.conversion_config.clone()).unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = engine.convert_single(input, &output) {
        exit_with(&e);
    }

    CliUtils::show_success(
        &format!("{} -> {}", input.display(), output.display()),
        cli.is_quiet(),
    );
    Ok(true)
}

fn handle_directory(cli: &CliConfig) -> Result<bool> {
    let input_dir = &cli.args.input;
    let output_dir = &cli.args.output;

    if cli.args.dry_run {
        let jobs = require_directory(output_dir)
            .and_then(|_| plan_jobs(&cli.conversion_config, input_dir, output_dir))
            .unwrap_or_else(|e| exit_with(&e));
        for job in &jobs {
            println!(
                "{} -> {}",
                CliUtils::relative_display(&job.input, input_dir),
                job.output.display()
            );
        }
        if !cli.is_quiet() {
            println!("{} PDF files would be converted", jobs.len());
        }
        return Ok(true);
    }

    let engine = ConversionEngine::new(cli.conversion_config.clone()).unwrap_or_else(|e| exit_with(&e));
    let summary = convert_all(&engine, input_dir, output_dir).unwrap_or_else(|e| exit_with(&e));

    if cli.args.json {
        println!("{}", summary.to_json()?);
    } else {
        report(&summary, cli);
    }

    Ok(summary.is_complete_success())
}

fn report(summary: &BatchSummary, cli: &CliConfig) {
    if summary.discovered == 0 {
        CliUtils::show_warning(
            &format!("No PDF files found in {}", summary.input_root.display()),
            cli.is_quiet(),
        );
        return;
    }

    for outcome in &summary.outcomes {
        let relative = CliUtils::relative_display(&outcome.input, &summary.input_root);
        match outcome.status {
            FileStatus::Converted => {
                let output = outcome
                    .output
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                CliUtils::show_success(&format!("{} -> {}", relative, output), cli.is_quiet());
            }
            FileStatus::Failed => CliUtils::show_error(&format!(
                "Error converting {}: {}",
                relative,
                outcome.error.as_deref().unwrap_or("unknown error")
            )),
            FileStatus::Skipped => {
                CliUtils::show_warning(&format!("Skipped {}", relative), cli.is_quiet())
            }
        }
    }

    if !cli.is_quiet() {
        println!(
            "\n{} in {}",
            summary.summary(),
            CliUtils::format_duration(Duration::from_millis(summary.processing_time_ms))
        );
    }
}
