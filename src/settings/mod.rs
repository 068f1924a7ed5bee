pub mod connection_config;
pub mod settings;
pub mod settings_error;
pub mod settings_source;
