use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid measurement timestamp '{value}': {source}")]
    TimestampParse {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Invalid air temperature: '{value}'")]
    InvalidTemperature { value: String },
}
