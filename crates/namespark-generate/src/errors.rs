use thiserror::Error;

/// Errors emitted while rendering generated names.
///
/// Generation itself cannot fail; only writing the result can.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
