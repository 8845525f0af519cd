//! Siklus report runner.
//!
//! Reads a report request as JSON, runs the accounting cycle and writes the
//! report bundle (or its workbook) as JSON to standard output. Logs go to
//! standard error.
//!
//! Usage: siklus-report --input request.json --pretty

use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use siklus_core::reports::{ReportRequest, ReportService};
use siklus_shared::{AppConfig, AppError, AppResult, LoggingConfig};

mod cli;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{}: {err}", err.error_code());
            return ExitCode::from(err.exit_code());
        }
    };
    init_tracing(&config.logging);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            error!(error = %format!("{err:#}"), "report generation failed");
            ExitCode::from(code)
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: &cli::Cli, config: &AppConfig) -> anyhow::Result<()> {
    let mut request = load_request(&cli.input)
        .with_context(|| format!("failed to load request from {}", cli.input.display()))?;

    if let Some(opening_capital) = cli.opening_capital {
        request.opening_capital = opening_capital;
    }
    if let Some(drawings) = cli.drawings {
        request.drawings = drawings;
    }
    info!(
        entries = request.entries.len(),
        adjusting_entries = request.adjusting_entries.len(),
        "request loaded"
    );

    let bundle = ReportService::from_config(config).generate_request(&request);

    let output = match (cli.sheets, cli.pretty) {
        (true, true) => serde_json::to_string_pretty(&bundle.workbook()),
        (true, false) => serde_json::to_string(&bundle.workbook()),
        (false, true) => serde_json::to_string_pretty(&bundle),
        (false, false) => serde_json::to_string(&bundle),
    }
    .map_err(|e| AppError::Internal(e.to_string()))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").map_err(AppError::from)?;
    Ok(())
}

fn load_request(path: &Path) -> AppResult<ReportRequest> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    if raw.trim().is_empty() {
        return Ok(ReportRequest::default());
    }
    Ok(serde_json::from_str(&raw)?)
}
