use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;

use crate::forward_service::forward_service_result::ForwardedResult;
use crate::printer_service::printer_service_error::PrinterServiceError;

impl IntoResponse for ForwardedResult {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else if self.is_missing_configuration() {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            self.status
                .and_then(|status| StatusCode::from_u16(status).ok())
                .filter(|status| status.is_client_error() || status.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY)
        };

        (status, Json(self)).into_response()
    }
}

impl IntoResponse for PrinterServiceError {
    fn into_response(self) -> Response {
        failure(StatusCode::BAD_REQUEST, self.to_string())
    }
}

/// A failure raised by the gateway itself, in the envelope's shape.
pub(crate) fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    let body = json!({ "success": false, "message": message.into() });
    (status, Json(body)).into_response()
}

pub(crate) fn multipart_failure(err: MultipartError) -> Response {
    failure(err.status(), err.body_text())
}

/// Turns a malformed JSON body into a bad request instead of axum's default
/// rejection.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, PrinterServiceError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| PrinterServiceError::BadRequest(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;
    use http::StatusCode;
    use serde_json::{Value, json};

    use crate::forward_service::forward_service_result::ForwardedResult;
    use crate::printer_service::printer_service_error::PrinterServiceError;
    use crate::route::envelope::failure;

    async fn body_of(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_answer_ok_with_the_envelope_on_success() {
        let response = ForwardedResult::from_upstream(204, b"").into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_of(response).await, json!({"success": true, "status": 204}));
    }

    #[tokio::test]
    async fn should_mirror_upstream_error_statuses() {
        let response =
            ForwardedResult::from_upstream(404, br#"{"error":"not found"}"#).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            json!({"success": false, "status": 404, "message": "not found"})
        );
    }

    #[test]
    fn should_map_other_failures_to_gateway_statuses() {
        assert_eq!(
            ForwardedResult::transport_failure("refused")
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ForwardedResult::from_upstream(302, b"").into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ForwardedResult::missing_configuration()
                .into_response()
                .status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn should_wrap_gateway_failures_in_the_envelope() {
        let response = failure(StatusCode::PAYLOAD_TOO_LARGE, "too big");

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_of(response).await,
            json!({"success": false, "message": "too big"})
        );
    }

    #[tokio::test]
    async fn should_answer_bad_requests_with_400() {
        let response =
            PrinterServiceError::BadRequest("no folder name given".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            json!({"success": false, "message": "Bad request: no folder name given"})
        );
    }
}
