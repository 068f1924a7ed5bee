use async_trait::async_trait;

use crate::forward_service::forward_service_request::ForwardServiceRequest;
use crate::forward_service::forward_service_result::ForwardedResult;
use crate::settings::connection_config::ConnectionConfig;

/// Single choke point for calls to the printer server.
///
/// Every outcome, including transport failures, comes back as a
/// [`ForwardedResult`]; nothing here is an error for the caller to handle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForwardService: Send + Sync {
    async fn execute(
        &self,
        config: &ConnectionConfig,
        request: ForwardServiceRequest,
    ) -> ForwardedResult;
}
