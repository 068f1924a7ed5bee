pub mod forward_service;
pub mod http_client;
pub mod multipart;
pub mod printer_service;
mod request_id;
mod route;
pub mod server;
pub mod settings;
