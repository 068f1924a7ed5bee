use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::warn;

use crate::printer_service::printer_service::PrinterService;
use crate::request_id::{BridgeRequestId, UNKNOWN_REQUEST_ID, X_REQUEST_ID};
use crate::route::{
    connection::{version, webcam},
    files::{
        MAX_UPLOAD_REQUEST_BYTES, create_folder, delete_file, delete_folder, list_at, list_root,
        print_file, upload,
    },
    health::health,
    job::{job_control, job_status},
    printer::{printer_command, printer_status},
};
use crate::settings::{
    connection_config::ConnectionConfig, settings::Settings, settings_source::SettingsSource,
};

#[derive(Clone)]
pub struct ServerState {
    pub printer_service: PrinterService,
    pub settings_source: Arc<dyn SettingsSource>,
}

impl ServerState {
    pub fn new(printer_service: PrinterService, settings_source: Arc<dyn SettingsSource>) -> Self {
        Self {
            printer_service,
            settings_source,
        }
    }

    /// Settings as of this request. A source that cannot be read yields
    /// empty settings, which forwarded calls report as missing configuration.
    pub async fn settings(&self) -> Settings {
        match self.settings_source.load().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!("Falling back to empty settings: {}", err);
                Settings::default()
            }
        }
    }

    pub async fn connection_config(&self) -> ConnectionConfig {
        self.settings().await.connection_config()
    }
}

pub fn router(server_state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/printer", get(printer_status))
        .route("/api/printer/command", post(printer_command))
        .route("/api/job", get(job_status).post(job_control))
        .route("/api/files", get(list_root))
        .route("/api/files/{*path}", get(list_at).delete(delete_file))
        .route(
            "/api/upload",
            post(upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_REQUEST_BYTES)),
        )
        .route("/api/print", post(print_file))
        .route("/api/folders", post(create_folder))
        .route("/api/folders/{*path}", delete(delete_folder))
        .route("/api/webcam", get(webcam))
        .route("/api/version", get(version))
        .with_state(server_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or(UNKNOWN_REQUEST_ID);

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(SetRequestIdLayer::new(
            X_REQUEST_ID.clone(),
            BridgeRequestId::default(),
        ))
}
