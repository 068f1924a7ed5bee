use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::forward_service::{
    forward_service::ForwardService,
    forward_service_request::{FileField, ForwardServiceRequest},
    forward_service_result::ForwardedResult,
};
use crate::http_client::{
    http_client::HttpClient,
    request::{Request, RequestHeaders, RequestMethod},
    reqwest_http_client::ReqwestHttpClient,
};
use crate::settings::connection_config::ConnectionConfig;

pub const X_API_KEY: &str = "X-Api-Key";
pub const CONTENT_TYPE: &str = "Content-Type";

const LOGGED_BODY_CHARS: usize = 1000;

#[derive(Clone)]
pub struct HttpForwardService {
    http_client: Arc<dyn HttpClient>,
}

impl HttpForwardService {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// JSON call; `body` is only sent for POST and PUT.
    pub async fn forward(
        &self,
        config: &ConnectionConfig,
        endpoint: &str,
        method: RequestMethod,
        body: Option<Value>,
    ) -> ForwardedResult {
        self.execute(config, ForwardServiceRequest::json(endpoint, method, body))
            .await
    }

    /// `multipart/form-data` POST with the optional file sent first.
    pub async fn forward_multipart(
        &self,
        config: &ConnectionConfig,
        endpoint: &str,
        fields: Vec<(String, String)>,
        file: Option<FileField>,
    ) -> ForwardedResult {
        self.execute(config, ForwardServiceRequest::multipart(endpoint, fields, file))
            .await
    }
}

impl Default for HttpForwardService {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::default()))
    }
}

#[async_trait]
impl ForwardService for HttpForwardService {
    async fn execute(
        &self,
        config: &ConnectionConfig,
        request: ForwardServiceRequest,
    ) -> ForwardedResult {
        if !config.is_complete() {
            warn!(
                "Not forwarding {} {}: printer URL or API key is not configured",
                request.method, request.endpoint
            );
            return ForwardedResult::missing_configuration();
        }

        let url = config.endpoint_url(&request.endpoint);
        let mut headers =
            RequestHeaders::from([(X_API_KEY.to_string(), config.api_key().to_string())]);

        let body = match request.encode_payload() {
            Some(payload) => {
                headers.insert(CONTENT_TYPE.to_string(), payload.content_type);
                payload.body
            }
            None => Default::default(),
        };

        info!("Forwarding {} {}", request.method, url);

        let outbound = Request {
            method: request.method,
            url: url.clone(),
            headers,
            body,
            timeout: Some(request.timeout),
        };

        match self.http_client.execute(outbound).await {
            Ok(response) => {
                info!(
                    "{} {} answered {}: {}",
                    request.method,
                    url,
                    response.status,
                    body_prefix(&response.body)
                );

                let result = ForwardedResult::from_upstream(response.status, &response.body);
                if !result.success {
                    warn!(
                        "Printer server rejected {} {} with {}",
                        request.method, url, response.status
                    );
                }
                result
            }
            Err(err) => {
                error!("Forwarding {} {} failed: {}", request.method, url, err);
                ForwardedResult::transport_failure(err.to_string())
            }
        }
    }
}

fn body_prefix(body: &[u8]) -> String {
    // a char is at most four bytes
    let head = &body[..body.len().min(LOGGED_BODY_CHARS * 4)];
    String::from_utf8_lossy(head)
        .chars()
        .take(LOGGED_BODY_CHARS)
        .collect()
}
