use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorseError {
    #[error("Code {code} is outside the reference table (0..{max})", max = crate::consts::SEMAPHORE_MAX)]
    OutOfRange { code: usize },

    #[error("Code '{query}' is outside the reference table (0..{max})", max = crate::consts::SEMAPHORE_MAX)]
    QueryOutOfRange { query: String },

    #[error("Code {code} has no assigned character")]
    Unassigned { code: usize },

    #[error("Empty dot/dash pattern")]
    EmptyPattern,

    #[error("Invalid element '{ch}' at position {position} (expected '.' or '-')")]
    InvalidElement { ch: char, position: usize },

    #[error("Pattern of {len} elements exceeds the {max} element limit", max = crate::consts::MAX_ELEMENTS)]
    PatternTooLong { len: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type MorseResult<T> = Result<T, MorseError>;
