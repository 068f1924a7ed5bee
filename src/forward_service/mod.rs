pub mod forward_service;
pub mod forward_service_request;
pub mod forward_service_result;
pub mod http_forward_service;
