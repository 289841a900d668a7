mod logging;
mod output;
mod settings;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use settings::{Overrides, Settings, SettingsError};
use tabsummary_core::Error as CoreError;
use tabsummary_core::ingest::read_csv;
use tabsummary_report::{ReportError, df_summary, summarize_report};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("config error: {0}")]
    Config(#[from] SettingsError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "tabsummary",
    version,
    about = "Data frame summary report for a CSV file"
)]
struct Cli {
    /// Input CSV file.
    #[arg(value_name = "CSV")]
    input: PathBuf,
    /// Table name shown in the caption and used for chart file names.
    #[arg(long)]
    name: Option<String>,
    /// TOML file with `[summary]` and `[csv]` settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
    /// Output file; stdout when omitted.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[arg(long, default_value_t = false)]
    log_json: bool,
    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_json)?;
    run(cli)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        input,
        name,
        config,
        format,
        out,
        log_json: _,
        overrides,
    } = cli;

    let mut settings = Settings::load(config.as_deref())?;
    settings.apply(&overrides);
    let csv_options = settings.csv.to_options()?;
    let options = settings.summary;

    let timer = Instant::now();
    tracing::info!(event = "run_started", input = %input.display(), format = ?format);

    let mut dataset = read_csv(&input, &csv_options)?;
    if let Some(name) = name {
        dataset = dataset.with_name(name);
    }
    tracing::info!(
        event = "dataset_loaded",
        table = dataset.name(),
        rows = dataset.height(),
        columns = dataset.width()
    );

    let rendered = match format {
        OutputFormat::Html => df_summary(&dataset, &options)?.to_html().into_bytes(),
        OutputFormat::Json => {
            let report = summarize_report(&dataset, &options)?;
            let mut bytes = serde_json::to_vec_pretty(&report)?;
            bytes.push(b'\n');
            bytes
        }
    };

    match &out {
        Some(path) => {
            output::write_bytes_atomic(path, &rendered)?;
            tracing::info!(event = "report_written", path = %path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);

    Ok(())
}
