use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::forward_service::forward_service_result::ForwardedResult;
use crate::printer_service::printer_service_error::PrinterServiceError;
use crate::printer_service::printer_service_request::JobCommand;
use crate::route::envelope::json_body;
use crate::server::ServerState;

pub(crate) async fn job_status(State(state): State<ServerState>) -> ForwardedResult {
    let config = state.connection_config().await;
    state.printer_service.get_job_status(&config).await
}

pub(crate) async fn job_control(
    State(state): State<ServerState>,
    body: Result<Json<JobCommand>, JsonRejection>,
) -> Result<ForwardedResult, PrinterServiceError> {
    let command = json_body(body)?;
    let config = state.connection_config().await;
    Ok(state.printer_service.control_job(&config, command).await)
}
