use clap::{Parser, ValueEnum};
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sensitive_file_finder::prelude::*;

/// Report could not be rendered or written
const EXIT_WRITE_FAILED: u8 = 3;
/// Root directory could not be scanned (clap keeps 2 for usage errors)
const EXIT_SCAN_FAILED: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Parser)]
#[command(name = "sensitive_file_finder")]
#[command(about = "Search a directory and generate a Markdown file with found files", long_about = None)]
struct Cli {
    /// Path to the directory to search
    directory: PathBuf,

    /// Name of the output file
    #[arg(short, long, default_value = "search_results.md")]
    output: PathBuf,

    /// Directory to save the output file (created if missing)
    #[arg(short = 'd', long, default_value = ".")]
    output_dir: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Run in batch mode (no progress spinner, no summary)
    #[arg(long)]
    batch: bool,
}

/// A fatal error together with the process exit code it maps to
struct Failure {
    code: u8,
    error: anyhow::Error,
}

/// Successful run: where the report went and how many files it lists
struct Outcome {
    output_path: PathBuf,
    file_count: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match run(&cli) {
        Ok(outcome) => {
            println!(
                "{}",
                status_line(cli.format, outcome.file_count == 0, &outcome.output_path)
            );
            ExitCode::SUCCESS
        }
        Err(failure) => {
            eprintln!("Error: {:#}", failure.error);
            ExitCode::from(failure.code)
        }
    }
}

/// Scan, render and write the report described by `cli`
fn run(cli: &Cli) -> Result<Outcome, Failure> {
    if !cli.batch {
        println!("Sensitive File Finder");
        println!("Scanning {}", cli.directory.display());
        println!();
    }

    let progress = if cli.batch {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        match ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} file(s) scanned") {
            Ok(style) => pb.set_style(style),
            Err(e) => log::debug!("Falling back to default spinner style: {}", e),
        }
        pb
    };

    let scanned = scan_directory_with(&cli.directory, |_| progress.inc(1));
    progress.finish_and_clear();
    let records = scanned.map_err(|error| Failure {
        code: EXIT_SCAN_FAILED,
        error,
    })?;

    let document = match cli.format {
        OutputFormat::Markdown => Ok(render_markdown(&records, &cli.directory)),
        OutputFormat::Json => render_json(&records, &cli.directory),
    };
    let output_path = document
        .and_then(|doc| write_report(&doc, &cli.output_dir, &cli.output))
        .map_err(|error| Failure {
            code: EXIT_WRITE_FAILED,
            error,
        })?;

    if !cli.batch && !records.is_empty() {
        print_summary(&records);
    }

    Ok(Outcome {
        output_path,
        file_count: records.len(),
    })
}

/// Final line telling the user where the report was written
fn status_line(format: OutputFormat, is_empty: bool, output_path: &Path) -> String {
    match format {
        OutputFormat::Markdown if is_empty => {
            format!("No files found. Markdown file created at: {}", output_path.display())
        }
        OutputFormat::Markdown => format!("Markdown file saved at '{}'", output_path.display()),
        OutputFormat::Json => format!("JSON report saved at '{}'", output_path.display()),
    }
}

fn print_summary(records: &[FileRecord]) {
    println!("==================================================");
    println!("SCAN COMPLETE");
    println!("==================================================");
    println!("Files found: {}", records.len());
    for (reason, count) in summarize(records) {
        println!("  {}: {}", reason, count);
    }
    println!();
}
