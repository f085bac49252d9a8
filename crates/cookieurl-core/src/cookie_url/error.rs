//! Error type for the cookie URL encoder.

/// Raised when the encoder is handed input it cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The cookie list was empty; the endpoint needs at least one pair.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
