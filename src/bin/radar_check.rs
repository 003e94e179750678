use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tech_radar::error::log_radar_error;
use tech_radar::radar::RadarSummary;
use tech_radar::{validate, RadarDocument, ReportFormat, ValidationReport, ValidatorConfig};

/// Exit code when at least one structural check failed.
const EXIT_CHECKS_FAILED: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "radar_check",
    about = "Structural validation for tech radar datasets"
)]
struct Cli {
    /// JSON config file (radar_path, report_format, log_level)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Radar dataset to validate (defaults to platform-tech-radar.json)
    #[arg(long)]
    radar: Option<PathBuf>,
    /// Output format for reports
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Log level for diagnostics on stderr
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every structural check and print the report
    Check,
    /// Validate, then list entries per quadrant with their current ring
    Summary,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum FormatArg {
    Json,
    Table,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Table => ReportFormat::Table,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = resolve_config(&cli);
    tech_radar::init_logging(config.tracing_level());

    let document = load_document(&config)?;
    match cli.command {
        Commands::Check => run_check(&document, config.report_format),
        Commands::Summary => run_summary(&document, config.report_format),
    }
}

fn resolve_config(cli: &Cli) -> ValidatorConfig {
    let mut config = cli
        .config
        .as_ref()
        .map(ValidatorConfig::load_from_file)
        .unwrap_or_default();
    if let Some(radar) = &cli.radar {
        config.radar_path = radar.clone();
    }
    if let Some(format) = cli.format {
        config.report_format = format.into();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config
}

fn load_document(config: &ValidatorConfig) -> Result<RadarDocument> {
    RadarDocument::load(&config.radar_path)
        .inspect_err(|err| log_radar_error(err, "radar_check load"))
        .with_context(|| format!("loading radar dataset {}", config.radar_path.display()))
}

fn run_check(document: &RadarDocument, format: ReportFormat) -> Result<ExitCode> {
    let report = validate(document);
    match format {
        ReportFormat::Json => report.print_json()?,
        ReportFormat::Table => report.print_table(),
    }
    Ok(exit_code(&report))
}

fn run_summary(document: &RadarDocument, format: ReportFormat) -> Result<ExitCode> {
    let report = validate(document);
    if !report.is_success() {
        for failure in report.failures() {
            eprintln!(
                "FAIL {}: {}",
                failure.name,
                failure.message.as_deref().unwrap_or_default()
            );
        }
        return Ok(exit_code(&report));
    }

    let radar = document
        .to_radar()
        .with_context(|| format!("reading typed radar from {}", document.source()))?;
    let summary = RadarSummary::from_radar(&radar);
    match format {
        ReportFormat::Json => summary.print_json()?,
        ReportFormat::Table => summary.print_table(),
    }
    Ok(ExitCode::SUCCESS)
}

fn exit_code(report: &ValidationReport) -> ExitCode {
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_CHECKS_FAILED)
    }
}
