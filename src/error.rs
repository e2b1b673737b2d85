#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("malformed timestamp in field `{field}`: {value:?}")]
    MalformedTimestamp { field: String, value: String },

    #[error("required sequence field `{field}` is missing or not a sequence")]
    MissingRequiredSequence { field: String },

    #[error("type mismatch in field `{field}`: expected {expected}")]
    TypeMismatch { field: String, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
