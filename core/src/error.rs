use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid board config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Range for worker '{worker_id}' ends before it starts: {start} > {end}")]
    InvalidRange {
        worker_id: String,
        start:     NaiveDate,
        end:       NaiveDate,
    },

    #[error("Record references unknown worker '{worker_id}'")]
    UnknownWorker { worker_id: String },
}

pub type BoardResult<T> = Result<T, BoardError>;
