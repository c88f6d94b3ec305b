/// Thai Scanner - finds untranslated Thai text in source files
///
/// The main entry point for the scanner application. It parses command-line
/// arguments, builds the scan configuration and prints one outcome per file.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use std::fs::File;
use std::path::{Path, PathBuf};

use thai_scanner::config::{ScanConfig, DEFAULT_EXTENSIONS};
use thai_scanner::core::scanner::{ScanResult, Scanner};
use thai_scanner::utils::file_utils;
use thai_scanner::utils::output_formatter::{self, END_MESSAGE, START_MESSAGE};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "thai_scanner",
    version,
    about = "Scans source files for untranslated Thai text",
    long_about = "Scans a list of files under a base directory and prints every distinct
run of Thai script (U+0E00 to U+0E7F) found in each one, so the strings can be
moved into translation tables.

Missing or unreadable files are reported and skipped; the scan always runs to
the end of the list."
)]
struct Args {
    /// Relative path(s) of the files to scan (default: the configured list)
    #[arg(name = "file_paths")]
    file_paths: Vec<String>,

    /// Directory the file paths are relative to (default: src/pages)
    #[arg(long = "base-dir")]
    base_dir: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Scan every matching file under the base directory instead of a fixed list
    #[arg(long = "discover", action = ArgAction::SetTrue, conflicts_with = "file_paths")]
    discover: bool,

    /// File extension picked up by --discover (can be used multiple times, default: js, jsx, ts, tsx)
    #[arg(long = "ext", action = ArgAction::Append, requires = "discover")]
    ext: Option<Vec<String>>,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Export results to JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Export results to CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Print totals after the scan
    #[arg(long = "summary", action = ArgAction::SetTrue)]
    summary: bool,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write log records to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args);

    let config = build_config(&args)?;
    let scanner = Scanner::new(&config);

    let print = !args.quiet;
    if print {
        println!("{}", START_MESSAGE);
        if args.md {
            println!("```");
        }
    }

    let results = scanner.scan_with(|result| {
        if print {
            for line in output_formatter::colorize_result(result) {
                println!("{}", line);
            }
        }
    });

    if print {
        if args.md {
            println!("```");
        }
        println!("{}", END_MESSAGE);

        if args.summary {
            print!("\n{}", output_formatter::create_summary(&results));
        }
    }

    export_results(&results, &args)?;

    Ok(())
}

/// Set up logging with optional file output
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        match File::create(log_file) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {}", log_file.display(), e),
        }
    }

    builder.init();
}

/// Combine defaults, the optional config file and command line overrides
fn build_config(args: &Args) -> Result<ScanConfig> {
    let config = match &args.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };

    let config = config
        .with_base_dir(args.base_dir.clone())
        .with_files(args.file_paths.clone());

    if !args.discover {
        return Ok(config);
    }

    let extensions = args.ext.clone().unwrap_or_else(|| {
        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    });
    let files = file_utils::discover_files(&config.base_dir, &extensions)
        .with_context(|| format!("Failed to discover files under {}", config.base_dir.display()))?;
    info!("Discovered {} files under {}", files.len(), config.base_dir.display());

    Ok(ScanConfig::new(config.base_dir, files))
}

/// Write the requested export files
fn export_results(results: &[ScanResult], args: &Args) -> Result<()> {
    if let Some(json_path) = &args.json {
        ensure_parent_dir(json_path)?;
        output_formatter::export_results_json(results, json_path)?;
        info!("Wrote JSON results to {}", json_path.display());
    }

    if let Some(csv_path) = &args.csv {
        ensure_parent_dir(csv_path)?;
        output_formatter::create_csv_report(results, csv_path)?;
        info!("Wrote CSV results to {}", csv_path.display());
    }

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    Ok(())
}
