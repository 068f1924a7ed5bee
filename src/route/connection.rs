use axum::extract::State;
use serde_json::json;

use crate::forward_service::forward_service_result::ForwardedResult;
use crate::server::ServerState;

pub(crate) async fn version(State(state): State<ServerState>) -> ForwardedResult {
    let config = state.connection_config().await;
    state.printer_service.test_connection(&config).await
}

/// Resolved webcam URLs, wrapped in the same envelope as forwarded calls.
pub(crate) async fn webcam(State(state): State<ServerState>) -> ForwardedResult {
    match state.settings().await.webcam_urls() {
        Some(urls) => ForwardedResult {
            success: true,
            status: None,
            data: Some(json!(urls)),
            message: None,
        },
        None => ForwardedResult::missing_configuration(),
    }
}
