pub(crate) mod connection;
pub(crate) mod envelope;
pub(crate) mod files;
pub(crate) mod health;
pub(crate) mod job;
pub(crate) mod printer;
