use crate::record::RecordId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Distractor count cannot be negative: {0}")]
    NegativeCount(i64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Duplicate record id: {0}")]
    DuplicateRecordId(RecordId),

    #[error("Unknown UNESCO tag: {0}")]
    UnknownUnescoTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
