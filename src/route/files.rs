use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::StatusCode;
use serde::Deserialize;
use tracing::info;

use crate::forward_service::forward_service_result::ForwardedResult;
use crate::printer_service::printer_service_error::PrinterServiceError;
use crate::printer_service::printer_service_request::{CreateFolder, UploadFile};
use crate::route::envelope::{failure, json_body, multipart_failure};
use crate::server::ServerState;

/// Largest file the gateway accepts; the printer server itself is
/// not told about it.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Request body limit for uploads: the file plus room for boundaries,
/// part headers and the form fields.
pub const MAX_UPLOAD_REQUEST_BYTES: usize = MAX_UPLOAD_BYTES + 64 * 1024;

const ORIGIN: &str = "local";

const PRINTABLE_EXTENSIONS: [&str; 2] = ["stl", "gcode"];

#[derive(Debug, Deserialize)]
pub(crate) struct SelectFile {
    pub file_path: String,
}

pub(crate) async fn list_root(State(state): State<ServerState>) -> ForwardedResult {
    let config = state.connection_config().await;
    state.printer_service.list_files(&config, None).await
}

pub(crate) async fn list_at(
    State(state): State<ServerState>,
    Path(path): Path<String>,
) -> ForwardedResult {
    let config = state.connection_config().await;
    state
        .printer_service
        .list_files(&config, Some(without_origin(&path)))
        .await
}

pub(crate) async fn delete_file(
    State(state): State<ServerState>,
    Path(path): Path<String>,
) -> Result<ForwardedResult, PrinterServiceError> {
    let config = state.connection_config().await;
    state.printer_service.delete_file(&config, &path).await
}

pub(crate) async fn print_file(
    State(state): State<ServerState>,
    body: Result<Json<SelectFile>, JsonRejection>,
) -> Result<ForwardedResult, PrinterServiceError> {
    let select = json_body(body)?;
    let config = state.connection_config().await;
    state
        .printer_service
        .select_file_to_print(&config, &select.file_path)
        .await
}

pub(crate) async fn create_folder(
    State(state): State<ServerState>,
    body: Result<Json<CreateFolder>, JsonRejection>,
) -> Result<ForwardedResult, PrinterServiceError> {
    let folder = json_body(body)?;
    let config = state.connection_config().await;
    state.printer_service.create_folder(&config, folder).await
}

pub(crate) async fn delete_folder(
    State(state): State<ServerState>,
    Path(path): Path<String>,
) -> Result<ForwardedResult, PrinterServiceError> {
    let config = state.connection_config().await;
    state.printer_service.delete_folder(&config, &path).await
}

/// Accepts a `file` part plus an optional `print_immediately` flag.
pub(crate) async fn upload(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => return failure(rejection.status(), rejection.body_text()),
    };
    let mut file: Option<(String, Bytes)> = None;
    let mut print = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => return multipart_failure(err),
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(data) => file = Some((filename, data)),
                    Err(err) => return multipart_failure(err),
                }
            }
            Some("print_immediately") | Some("print") => match field.text().await {
                Ok(value) => print = is_truthy(&value),
                Err(err) => return multipart_failure(err),
            },
            _ => {}
        }
    }

    let Some((filename, data)) = file else {
        return PrinterServiceError::BadRequest("no valid file provided".to_string())
            .into_response();
    };

    if data.len() > MAX_UPLOAD_BYTES {
        return failure(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("file exceeds the {} byte upload limit", MAX_UPLOAD_BYTES),
        );
    }

    if !is_printable(&filename) {
        return PrinterServiceError::BadRequest("only STL or GCODE files are allowed".to_string())
            .into_response();
    }

    info!("Uploading {} ({} bytes, print: {})", filename, data.len(), print);

    let config = state.connection_config().await;
    let upload = UploadFile {
        filename,
        data,
        print,
    };

    state
        .printer_service
        .upload_file(&config, upload)
        .await
        .into_response()
}

fn is_printable(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, extension)| {
            PRINTABLE_EXTENSIONS
                .iter()
                .any(|allowed| extension.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Gateway file paths name their origin (`local/...`) on every route;
/// listing is always relative to the local origin, so it is dropped there.
fn without_origin(path: &str) -> &str {
    let path = path.trim_matches('/');
    match path.strip_prefix(ORIGIN) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => path,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on" | "yes")
}
