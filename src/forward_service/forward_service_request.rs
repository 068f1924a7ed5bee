use std::time::Duration;

use bytes::Bytes;
use serde_json::Value;

use crate::http_client::request::RequestMethod;
use crate::multipart::multipart_body::{EncodedMultipart, MultipartBody};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

pub const FILE_FIELD_NAME: &str = "file";

/// Raw file content sent as the `file` part of a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FileField {
    pub filename: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForwardPayload {
    Empty,
    Json(Value),
    Multipart {
        fields: Vec<(String, String)>,
        file: Option<FileField>,
    },
}

/// One outbound call against the printer server, relative to the
/// connection's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardServiceRequest {
    pub endpoint: String,
    pub method: RequestMethod,
    pub payload: ForwardPayload,
    pub timeout: Duration,
}

pub(crate) struct EncodedPayload {
    pub content_type: String,
    pub body: Bytes,
}

impl ForwardServiceRequest {
    pub fn json(endpoint: impl Into<String>, method: RequestMethod, body: Option<Value>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            payload: body.map_or(ForwardPayload::Empty, ForwardPayload::Json),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::json(endpoint, RequestMethod::Get, None)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::json(endpoint, RequestMethod::Delete, None)
    }

    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        Self::json(endpoint, RequestMethod::Post, Some(body))
    }

    pub fn multipart(
        endpoint: impl Into<String>,
        fields: Vec<(String, String)>,
        file: Option<FileField>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: RequestMethod::Post,
            payload: ForwardPayload::Multipart { fields, file },
            timeout: UPLOAD_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Wire body and content type, if this method carries one.
    pub(crate) fn encode_payload(&self) -> Option<EncodedPayload> {
        if !self.method.allows_body() {
            return None;
        }

        match &self.payload {
            ForwardPayload::Empty => None,
            ForwardPayload::Json(value) => Some(EncodedPayload {
                content_type: "application/json".to_string(),
                body: Bytes::from(value.to_string()),
            }),
            ForwardPayload::Multipart { fields, file } => {
                let encoded = multipart_body(fields, file.as_ref()).encode();
                Some(EncodedPayload::from(encoded))
            }
        }
    }
}

impl From<EncodedMultipart> for EncodedPayload {
    fn from(encoded: EncodedMultipart) -> Self {
        Self {
            content_type: encoded.content_type(),
            body: encoded.body,
        }
    }
}

/// File part first, then the text fields in the order given.
pub(crate) fn multipart_body(fields: &[(String, String)], file: Option<&FileField>) -> MultipartBody {
    let mut body = MultipartBody::new();

    if let Some(file) = file {
        body = body.file(FILE_FIELD_NAME, file.filename.as_str(), file.data.clone());
    }

    for (name, value) in fields {
        body = body.text(name.as_str(), value.as_str());
    }

    body
}
