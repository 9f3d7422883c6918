//! Command implementation for flight processor CLI
//!
//! This module contains the main execution logic: logging setup, path
//! checks, overwrite confirmation, progress reporting and the final
//! summary.

use anyhow::Context;
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::app::services::pipeline::{Summary, run_files_with_progress};
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};

/// Main command runner for flight processor
///
/// 1. Set up logging and configuration
/// 2. Validate paths and confirm overwrites
/// 3. Run the pipeline with progress reporting
/// 4. Print summary statistics
pub fn run(args: Args) -> anyhow::Result<Summary> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = Config::from_args(&args);
    config.validate()?;

    if !config.assume_yes {
        let stdin = io::stdin();
        confirm_overwrites(&config, &mut stdin.lock(), &mut io::stdout())?;
    }

    let progress_bar = create_progress_bar(args.show_progress());

    let result = run_files_with_progress(
        &config.input_path,
        &config.output_path,
        &config.error_path,
        |rows| progress_bar.set_position(rows),
    );

    let summary = match result {
        Ok(summary) => {
            progress_bar.finish_and_clear();
            summary
        }
        Err(e) => {
            progress_bar.abandon();
            let input = config.input_path.display();
            return Err(e).with_context(|| format!("Failed to process {}", input));
        }
    };

    if !summary.is_clean() {
        warn!("{} records rejected, see {}", summary.invalid, config.error_path.display());
    }

    if !args.quiet {
        print_summary(&summary, &config, start_time.elapsed());
    }

    info!("Finished in {}", HumanDuration(start_time.elapsed()));
    Ok(summary)
}

/// Set up structured logging
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Ask before overwriting each existing output file
///
/// Anything other than `y` or `yes` aborts the run.
pub fn confirm_overwrites<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    for path in config.existing_outputs() {
        if !ask_overwrite(path, input, output)? {
            return Err(Error::processing_interrupted(format!(
                "Refused to overwrite {}",
                path.display()
            )));
        }
        debug!("Overwrite of {} confirmed", path.display());
    }
    Ok(())
}

fn ask_overwrite<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    write!(
        output,
        "{} {} ",
        format!("Overwrite {}?", path.display()).bright_yellow(),
        "[y/N]".bright_white()
    )
    .and_then(|_| output.flush())
    .map_err(|e| Error::io("Failed to write prompt", e))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| Error::io("Failed to read user input", e))?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn create_progress_bar(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} rows {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Classifying...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_summary(summary: &Summary, config: &Config, elapsed: Duration) {
    println!();
    println!("{}", "Processing complete".bright_green().bold());
    println!("  {} {}", "Rows read:".bright_white(), summary.rows_read);
    println!(
        "  {} {} {}",
        "Valid:".bright_white(),
        summary.valid.to_string().bright_green(),
        format!("({:.1}%)", summary.valid_rate()).bright_black()
    );
    println!(
        "  {} {}",
        "Rejected:".bright_white(),
        if summary.is_clean() {
            summary.invalid.to_string().normal()
        } else {
            summary.invalid.to_string().bright_red()
        }
    );
    println!("  {} {}", "Empty:".bright_white(), summary.empty);
    println!(
        "  {} {}",
        "Output:".bright_white(),
        config.output_path.display().to_string().bright_cyan()
    );
    println!(
        "  {} {}",
        "Errors:".bright_white(),
        config.error_path.display().to_string().bright_cyan()
    );
    println!("  {} {}", "Time:".bright_white(), HumanDuration(elapsed));
}
