use thiserror::Error;

/// Errors raised while building the matching components from keyword tables.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("subject id must not be empty")]
    EmptySubject,

    #[error("duplicate subject id: {0}")]
    DuplicateSubject(String),

    #[error("empty synonym in entry: {0}")]
    EmptySynonym(String),

    #[error("ordinal {number} is outside the lecture range 1..={max}")]
    OrdinalOutOfRange { number: u32, max: u32 },

    #[error("duplicate ordinal number: {0}")]
    DuplicateOrdinal(u32),

    #[error("lecture range upper bound must be at least 1")]
    EmptyRange,

    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),

    #[error("invalid keyword tables: {0}")]
    Tables(String),
}
