use std::ffi::OsString;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod cli;
mod config;
mod db;
mod error;
mod export;

use crate::cli::Cli;
use crate::export::ExportRequest;

/// Set up console logging, plus daily rotating files when LOG_DIR is set
///
/// The console layer writes to stderr so stdout only carries the export
/// outcome.
fn init_logging(config: &config::Config, verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_level.into());

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Log files will be created as: logs/info.log.2024-12-22, logs/error.log.2024-12-22
    let file_layers = config.log_dir.as_ref().and_then(|log_dir| {
        if let Err(e) = std::fs::create_dir_all(log_dir) {
            eprintln!("Cannot create log directory {}: {}", log_dir.display(), e);
            return None;
        }

        let info_file = tracing_appender::rolling::daily(log_dir, "info.log");
        let error_file = tracing_appender::rolling::daily(log_dir, "error.log");

        let info_layer = tracing_subscriber::fmt::layer()
            .with_writer(info_file)
            .with_ansi(false)
            .with_filter(LevelFilter::INFO);

        let error_layer = tracing_subscriber::fmt::layer()
            .with_writer(error_file)
            .with_ansi(false)
            .with_filter(LevelFilter::ERROR);

        Some(info_layer.and_then(error_layer))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layers)
        .init();
}

/// True when anything besides the program name was passed
fn has_arguments(args: &[OsString]) -> bool {
    args.len() > 1
}

fn parse_args<I, T>(args: I) -> Result<Cli, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // No arguments at all: show help, exit 1
    if !has_arguments(&args) {
        let _ = Cli::command().print_help();
        return Err(ExitCode::FAILURE);
    }

    Cli::try_parse_from(args).map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let config = config::Config::from_env();
    init_logging(&config, cli.verbose);

    let mut request = ExportRequest::for_today(cli.database, cli.output);
    if let Some(date) = cli.date {
        request.date = date;
    }
    info!("Starting daily job export for {}", request.date);

    if export::service::run(&request).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
