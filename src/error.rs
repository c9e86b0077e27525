use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonrankError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Monster {0} not found in roster")]
    UnknownMonster(u32),

    #[error("Offset index {index} out of range (table has {len} entries)")]
    OffsetIndex { index: usize, len: usize },
}

pub type MrResult<T> = Result<T, MonrankError>;
