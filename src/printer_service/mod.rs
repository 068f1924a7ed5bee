pub mod printer_service;
pub mod printer_service_error;
pub mod printer_service_request;
