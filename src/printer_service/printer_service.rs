use std::{sync::Arc, time::Duration};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::json;
use tracing::info;

use crate::forward_service::{
    forward_service::ForwardService,
    forward_service_request::{FileField, ForwardServiceRequest},
    forward_service_result::ForwardedResult,
};
use crate::printer_service::{
    printer_service_error::PrinterServiceError,
    printer_service_request::{CreateFolder, JobCommand, PrinterCommand, UploadFile},
};
use crate::settings::connection_config::ConnectionConfig;

pub const CONNECTION_TEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Bytes that would end or reshape a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Translates UI intents into printer server calls.
#[derive(Clone)]
pub struct PrinterService {
    forward_service: Arc<dyn ForwardService>,
}

impl PrinterService {
    pub fn new(forward_service: Arc<dyn ForwardService>) -> Self {
        Self { forward_service }
    }

    pub async fn get_printer_status(&self, config: &ConnectionConfig) -> ForwardedResult {
        self.forward_service
            .execute(config, ForwardServiceRequest::get("api/printer"))
            .await
    }

    pub async fn get_job_status(&self, config: &ConnectionConfig) -> ForwardedResult {
        self.forward_service
            .execute(config, ForwardServiceRequest::get("api/job"))
            .await
    }

    pub async fn send_command(
        &self,
        config: &ConnectionConfig,
        command: PrinterCommand,
    ) -> Result<ForwardedResult, PrinterServiceError> {
        if command.command.trim().is_empty() {
            return Err(PrinterServiceError::BadRequest(
                "no printer command given".to_string(),
            ));
        }

        Ok(self
            .forward_service
            .execute(
                config,
                ForwardServiceRequest::post("api/printer/command", command.to_body()),
            )
            .await)
    }

    pub async fn control_job(
        &self,
        config: &ConnectionConfig,
        command: JobCommand,
    ) -> ForwardedResult {
        info!("Job command {:?}", command);

        self.forward_service
            .execute(config, ForwardServiceRequest::post("api/job", command.to_body()))
            .await
    }

    /// Lists the root when `path` is absent or blank.
    pub async fn list_files(&self, config: &ConnectionConfig, path: Option<&str>) -> ForwardedResult {
        let endpoint = match path.map(clean_path).filter(|p| !p.is_empty()) {
            Some(path) => files_endpoint("api/files/local", path),
            None => "api/files".to_string(),
        };

        self.forward_service
            .execute(config, ForwardServiceRequest::get(endpoint))
            .await
    }

    pub async fn upload_file(
        &self,
        config: &ConnectionConfig,
        upload: UploadFile,
    ) -> Result<ForwardedResult, PrinterServiceError> {
        let filename = base_name(&upload.filename);
        if filename.is_empty() || upload.data.is_empty() {
            return Err(PrinterServiceError::BadRequest(
                "no valid file provided".to_string(),
            ));
        }

        let fields = vec![
            ("select".to_string(), "true".to_string()),
            ("print".to_string(), upload.print.to_string()),
        ];
        let file = FileField {
            filename: filename.to_string(),
            data: upload.data,
        };

        Ok(self
            .forward_service
            .execute(
                config,
                ForwardServiceRequest::multipart("api/files/local", fields, Some(file)),
            )
            .await)
    }

    pub async fn select_file_to_print(
        &self,
        config: &ConnectionConfig,
        path: &str,
    ) -> Result<ForwardedResult, PrinterServiceError> {
        let path = required_path(path, "no file specified to print")?;

        Ok(self
            .forward_service
            .execute(
                config,
                ForwardServiceRequest::post(
                    files_endpoint("api/files", path),
                    json!({ "command": "select", "print": true }),
                ),
            )
            .await)
    }

    pub async fn delete_file(
        &self,
        config: &ConnectionConfig,
        path: &str,
    ) -> Result<ForwardedResult, PrinterServiceError> {
        let path = required_path(path, "no file specified to delete")?;

        Ok(self
            .forward_service
            .execute(
                config,
                ForwardServiceRequest::delete(files_endpoint("api/files", path)),
            )
            .await)
    }

    pub async fn create_folder(
        &self,
        config: &ConnectionConfig,
        folder: CreateFolder,
    ) -> Result<ForwardedResult, PrinterServiceError> {
        let foldername = folder.foldername.trim();
        if foldername.is_empty() {
            return Err(PrinterServiceError::BadRequest(
                "no folder name given".to_string(),
            ));
        }

        let mut fields = vec![("foldername".to_string(), foldername.to_string())];

        // the printer server expects the parent path to end with '/'
        if let Some(parent) = folder.path.as_deref().map(clean_path).filter(|p| !p.is_empty()) {
            fields.push(("path".to_string(), format!("{}/", parent)));
        }

        Ok(self
            .forward_service
            .execute(
                config,
                ForwardServiceRequest::multipart("api/files/local", fields, None),
            )
            .await)
    }

    pub async fn delete_folder(
        &self,
        config: &ConnectionConfig,
        path: &str,
    ) -> Result<ForwardedResult, PrinterServiceError> {
        let path = required_path(path, "no folder specified to delete")?;

        Ok(self
            .forward_service
            .execute(
                config,
                ForwardServiceRequest::delete(files_endpoint("api/files", path)),
            )
            .await)
    }

    pub async fn test_connection(&self, config: &ConnectionConfig) -> ForwardedResult {
        self.forward_service
            .execute(
                config,
                ForwardServiceRequest::get("api/version").with_timeout(CONNECTION_TEST_TIMEOUT),
            )
            .await
    }
}

fn clean_path(path: &str) -> &str {
    path.trim().trim_matches('/')
}

fn required_path<'a>(path: &'a str, missing: &str) -> Result<&'a str, PrinterServiceError> {
    let path = clean_path(path);
    if path.is_empty() {
        return Err(PrinterServiceError::BadRequest(missing.to_string()));
    }
    Ok(path)
}

/// Appends `path` to `prefix` one encoded segment at a time, so file names
/// holding `#`, `?` or `%` stay part of the path.
fn files_endpoint(prefix: &str, path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .fold(prefix.to_string(), |mut endpoint, segment| {
            endpoint.push('/');
            endpoint.extend(utf8_percent_encode(segment, PATH_SEGMENT));
            endpoint
        })
}

/// Strips any client-side directory from an uploaded file name.
fn base_name(filename: &str) -> &str {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
}
