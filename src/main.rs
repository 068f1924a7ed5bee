mod cli_arguments;

use std::sync::Arc;

use clap::Parser;
use printer_bridge::forward_service::http_forward_service::HttpForwardService;
use printer_bridge::printer_service::printer_service::PrinterService;
use printer_bridge::server::{ServerState, router};
use printer_bridge::settings::settings_source::{
    FileSettingsSource, SettingsSource, StaticSettingsSource,
};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::CliArguments;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    let settings_source: Arc<dyn SettingsSource> = match &args.settings_file {
        Some(path) => {
            info!("Reading settings from {}", path.display());
            Arc::new(FileSettingsSource::new(path.clone()))
        }
        None => Arc::new(StaticSettingsSource::new(args.settings())),
    };

    let printer_service = PrinterService::new(Arc::new(HttpForwardService::default()));
    let state = ServerState::new(printer_service, settings_source);

    let tcp_listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port)).await?;

    info!("Server started on port {}", args.port);

    axum::serve(tcp_listener, router(state)).await?;

    Ok(())
}
