use serde::Serialize;
use serde_json::Value;

pub const MISSING_CONFIGURATION: &str = "missing configuration";
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Uniform envelope returned by every forwarded call.
///
/// `success` is true exactly when the printer server answered with a 2xx
/// status. Transport failures carry a `message` and no `status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForwardedResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ForwardedResult {
    pub fn from_upstream(status: u16, body: &[u8]) -> Self {
        if (200..300).contains(&status) {
            // 204 carries no body by definition
            let data = if status == 204 || body.is_empty() {
                None
            } else {
                serde_json::from_slice(body).ok()
            };

            Self {
                success: true,
                status: Some(status),
                data,
                message: None,
            }
        } else {
            Self {
                success: false,
                status: Some(status),
                data: None,
                message: Some(upstream_error_message(body)),
            }
        }
    }

    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            status: None,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn missing_configuration() -> Self {
        Self::transport_failure(MISSING_CONFIGURATION)
    }

    pub fn is_missing_configuration(&self) -> bool {
        !self.success
            && self.status.is_none()
            && self.message.as_deref() == Some(MISSING_CONFIGURATION)
    }
}

fn upstream_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}
