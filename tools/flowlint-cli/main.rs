use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use flowlint::{ValidationReport, validate_file};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable listing, one line per finding
    Text,
    /// JSON array with one report per input file
    Json,
}

/// Validate workflow definition files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Workflow JSON files to validate
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Treat warnings as failures
    #[arg(long)]
    strict: bool,
}

#[derive(serde::Serialize)]
struct FileReport {
    file: String,
    report: ValidationReport,
}

fn main() {
    let cli = Cli::parse();

    let mut all_passed = true;
    let mut file_reports = Vec::new();

    for path in &cli.files {
        let report = validate_file(path);
        let passed = report.valid && !(cli.strict && report.has_warnings());
        all_passed &= passed;

        match cli.format {
            OutputFormat::Text => print_text(path, &report, passed),
            OutputFormat::Json => file_reports.push(FileReport {
                file: path.display().to_string(),
                report,
            }),
        }
    }

    if matches!(cli.format, OutputFormat::Json) {
        match serde_json::to_string_pretty(&file_reports) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: failed to serialize reports: {}", e);
                std::process::exit(1);
            }
        }
    }

    if !all_passed {
        std::process::exit(1);
    }
}

fn print_text(path: &Path, report: &ValidationReport, passed: bool) {
    let verdict = if passed { "OK" } else { "FAILED" };
    println!("{}: {}", path.display(), verdict);
    for issue in report.errors.iter().chain(report.warnings.iter()) {
        println!("  {}", issue);
    }
}
