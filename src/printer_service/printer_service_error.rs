/// Caller input the bridge refuses to forward.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PrinterServiceError {
    #[error("Bad request: {0}")]
    BadRequest(String),
}
