// Main entry point
mod application;
mod domain;
mod infrastructure;
mod interfaces;
mod presentation;
mod state;

use clap::Parser;
use infrastructure::config::load_config;
use interfaces::cli::Cli;
use state::AppState;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    // Usage errors exit here, before any I/O
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            presentation::pager::print_output(&format!("Errore: {}\n", e)).ok();
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;

    if config.logging.enable {
        init_logging(&config.logging);
    }

    let state = AppState::new(config);
    let query = cli.query();

    let records = application::loader::load_dataset(state.source.as_ref())?;
    let result = application::lookup::lookup(&records, &query);

    let output = presentation::render::format_output(
        &result,
        &query,
        records.len(),
        &state.source.name(),
        &state.theme,
    );

    if state.config.paging {
        presentation::pager::print_with_pager(&output, &state.config.pager_command)?;
    } else {
        presentation::pager::print_output(&output)?;
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &infrastructure::config::Logging) {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(file)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!(
                    "Warning: Cannot open log file {}: {}. Logging to stderr.",
                    path, e
                );
            }
        }
    }

    // stdout is reserved for the lookup output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
