// src/main.rs

//! The main entry point for the zkctl command-line client.

use tracing::{error, info};
use tracing_subscriber::filter::EnvFilter;
use zkctl::cli::Cli;
use zkctl::client::ZooKeeperSession;
use zkctl::config::Config;
use zkctl::core::ExitReport;
use zkctl::session::SessionController;

#[tokio::main]
async fn main() {
    // Get the log level from the environment, defaulting to info.
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // Setup logging with compact format and ANSI colors. Diagnostics go to
    // stderr; stdout carries nothing but the final result line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(true)
        .init();

    let report = run_app().await;
    println!("{}", report.message);
    std::process::exit(report.code);
}

/// Resolves the invocation into an `ExitReport`: one result line and one
/// exit status, no matter which stage failed.
async fn run_app() -> ExitReport {
    let cli = Cli::parse_or_exit();

    let config = Config::from_cli(&cli.server);
    if let Err(err) = config.validate() {
        error!(server = %cli.server, error = %err, "Rejecting invalid server argument.");
        return ExitReport::failure(format!("invalid server {:?}: {err}", cli.server));
    }

    let command = match cli.command.into_command() {
        Ok(command) => command,
        Err(err) => return ExitReport::from(err),
    };

    info!(
        server = %config.connect_string,
        command = command.name(),
        "Connecting to the coordination service."
    );

    let (client, events) = match ZooKeeperSession::connect(&config).await {
        Ok(session) => session,
        Err(err) => return ExitReport::from(err),
    };

    SessionController::new(client, events, &config)
        .run(&command)
        .await
}
