//! Codec error types

/// Errors raised when building a codec from an invalid configuration
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Description budget too small: max_length {max_length} < {required} needed for marker, commit SHA and ellipsis")]
    BudgetTooSmall { max_length: usize, required: usize },

    #[error("Base SHA marker must not be empty")]
    EmptyMarker,

    #[error("Base SHA marker '{0}' ends in a hex digit and could match inside the SHA")]
    AmbiguousMarker(String),
}
