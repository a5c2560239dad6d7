use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollationError {
    #[error("{document} is not usable ordering data: {reason}")]
    InvalidOrderingData { document: String, reason: String },

    #[error("invalid collation rules at offset {position}: {message}")]
    Rules { position: usize, message: String },
}
