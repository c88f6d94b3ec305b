/// Output formatter for scan results
///
/// This module handles turning scan results into console lines and exporting
/// them as JSON or CSV.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::scanner::ScanResult;

/// Printed before the first file is scanned
pub const START_MESSAGE: &str = "Starting translation scanner...";

/// Printed after the last file is scanned
pub const END_MESSAGE: &str = "Scan complete.";

/// Format one scan result as console lines
///
/// # Arguments
///
/// * `result` - Outcome for a single file
///
/// # Returns
///
/// The header line, followed by one ` - {match}` line per distinct match
pub fn format_result(result: &ScanResult) -> Vec<String> {
    match result {
        ScanResult::FileMissing { path } => {
            vec![format!("File not found: {}", path.display())]
        }
        ScanResult::NoMatches { path } => {
            vec![format!("No Thai text found in {}", path.display())]
        }
        ScanResult::Matches { path, occurrences, matches } => {
            let mut lines = Vec::with_capacity(matches.len() + 1);
            lines.push(format!("Found {} Thai strings in {}", occurrences, path.display()));
            lines.extend(matches.iter().map(|m| format!(" - {}", m)));
            lines
        }
        ScanResult::ReadFailure { path, reason } => {
            vec![format!("Could not read {}: {}", path.display(), reason)]
        }
    }
}

/// Color the header line of a result for terminal display
///
/// `colored` drops the escape codes on its own when stdout is not a terminal.
pub fn colorize_result(result: &ScanResult) -> Vec<String> {
    let mut lines = format_result(result);
    if let Some(header) = lines.first_mut() {
        *header = match result {
            ScanResult::FileMissing { .. } => header.red().to_string(),
            ScanResult::ReadFailure { .. } => header.red().bold().to_string(),
            ScanResult::NoMatches { .. } => header.green().to_string(),
            ScanResult::Matches { .. } => header.yellow().bold().to_string(),
        };
    }
    lines
}

/// Format all results as one block of text
///
/// # Arguments
///
/// * `results` - Outcomes in scan order
/// * `use_markdown` - Whether to wrap the block in markdown triple backticks
pub fn format_report(results: &[ScanResult], use_markdown: bool) -> String {
    let mut output = String::new();

    if use_markdown {
        output.push_str("```\n");
    }

    for result in results {
        for line in format_result(result) {
            output.push_str(&line);
            output.push('\n');
        }
    }

    if use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Totals across a whole scan
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_missing: usize,
    pub files_unreadable: usize,
    pub files_with_thai: usize,
    pub distinct_strings: usize,
}

impl ScanSummary {
    pub fn from_results(results: &[ScanResult]) -> Self {
        let mut summary = ScanSummary {
            files_scanned: results.len(),
            ..Default::default()
        };

        for result in results {
            match result {
                ScanResult::FileMissing { .. } => summary.files_missing += 1,
                ScanResult::ReadFailure { .. } => summary.files_unreadable += 1,
                ScanResult::NoMatches { .. } => {}
                ScanResult::Matches { matches, .. } => {
                    summary.files_with_thai += 1;
                    summary.distinct_strings += matches.len();
                }
            }
        }

        summary
    }
}

/// Create a summary of a whole scan
pub fn create_summary(results: &[ScanResult]) -> String {
    let summary = ScanSummary::from_results(results);
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Scan Summary".yellow().bold()));
    output.push_str(&format!("Files scanned: {}\n", summary.files_scanned));
    output.push_str(&format!("Files with Thai text: {}\n", summary.files_with_thai));
    output.push_str(&format!("Distinct Thai strings: {}\n", summary.distinct_strings));
    output.push_str(&format!("Files not found: {}\n", summary.files_missing));
    output.push_str(&format!("Files not readable: {}\n", summary.files_unreadable));

    output
}

/// Export results to a JSON file
///
/// # Arguments
///
/// * `results` - Outcomes in scan order
/// * `output_path` - Path where the JSON file will be written
pub fn export_results_json(results: &[ScanResult], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, results).context("Failed to write JSON data")?;

    Ok(())
}

/// Create a CSV report from scan results
///
/// One row per distinct match; files without matches get a single row with an
/// empty match column, or the failure reason for unreadable files.
pub fn create_csv_report(results: &[ScanResult], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create CSV output file: {}", output_path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["Path", "Status", "Match"])
        .context("Failed to write CSV header")?;

    for result in results {
        let path = result.path().display().to_string();
        match result {
            ScanResult::Matches { matches, .. } => {
                for value in matches {
                    writer
                        .write_record([path.as_str(), result.status(), value.as_str()])
                        .context("Failed to write CSV record")?;
                }
            }
            ScanResult::ReadFailure { reason, .. } => {
                writer
                    .write_record([path.as_str(), result.status(), reason.as_str()])
                    .context("Failed to write CSV record")?;
            }
            _ => {
                writer
                    .write_record([path.as_str(), result.status(), ""])
                    .context("Failed to write CSV record")?;
            }
        }
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::patterns::MatchSet;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_results() -> Vec<ScanResult> {
        let matches: MatchSet = ["ราคา", "บาท"].iter().map(|s| s.to_string()).collect();
        vec![
            ScanResult::Matches {
                path: PathBuf::from("/tmp/proj/a.txt"),
                occurrences: 3,
                matches,
            },
            ScanResult::FileMissing { path: PathBuf::from("/tmp/proj/b.txt") },
            ScanResult::NoMatches { path: PathBuf::from("/tmp/proj/c.txt") },
            ScanResult::ReadFailure {
                path: PathBuf::from("/tmp/proj/d.txt"),
                reason: "invalid UTF-8 content".to_string(),
            },
        ]
    }

    #[test]
    fn test_format_result_lines() {
        let results = sample_results();

        assert_eq!(
            format_result(&results[0]),
            vec![
                "Found 3 Thai strings in /tmp/proj/a.txt",
                " - บาท",
                " - ราคา",
            ]
        );
        assert_eq!(format_result(&results[1]), vec!["File not found: /tmp/proj/b.txt"]);
        assert_eq!(format_result(&results[2]), vec!["No Thai text found in /tmp/proj/c.txt"]);
        assert_eq!(
            format_result(&results[3]),
            vec!["Could not read /tmp/proj/d.txt: invalid UTF-8 content"]
        );
    }

    #[test]
    fn test_format_report_markdown() {
        let results = sample_results();
        let plain = format_report(&results, false);
        assert!(plain.starts_with("Found 3 Thai strings"));
        assert_eq!(plain.lines().count(), 6);

        let md = format_report(&results, true);
        assert!(md.starts_with("```\n"));
        assert!(md.ends_with("```\n"));
    }

    #[test]
    fn test_summary_counts() {
        let summary = ScanSummary::from_results(&sample_results());
        assert_eq!(
            summary,
            ScanSummary {
                files_scanned: 4,
                files_missing: 1,
                files_unreadable: 1,
                files_with_thai: 1,
                distinct_strings: 2,
            }
        );
        assert!(create_summary(&sample_results()).contains("Files scanned: 4"));
    }

    #[test]
    fn test_export_json() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("results.json");
        export_results_json(&sample_results(), &out).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1]["status"], "file_missing");
        assert_eq!(entries[3]["reason"], "invalid UTF-8 content");
    }

    #[test]
    fn test_csv_report() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("results.csv");
        create_csv_report(&sample_results(), &out).unwrap();

        let mut reader = csv::Reader::from_path(&out).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[0][2], "บาท");
        assert_eq!(&rows[2][1], "file_missing");
        assert_eq!(&rows[4][2], "invalid UTF-8 content");
    }
}
