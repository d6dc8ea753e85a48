use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrivePadError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Illegal State: {0}")]
    IllegalState(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type SpResult<T> = Result<T, ScrivePadError>;
