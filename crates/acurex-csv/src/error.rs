use acurex_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read the CSV data: {0}")]
    Parse(#[source] csv::Error),
    #[error("CSV data has no header row")]
    EmptyInput,
    #[error("could not read the CSV data: {0}")]
    Shape(#[from] CoreError),
    #[error("failed to write CSV: {0}")]
    Write(#[source] csv::Error),
    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl CsvError {
    /// Whether the input itself is unusable, as opposed to a local I/O failure.
    pub fn is_unreadable_input(&self) -> bool {
        matches!(
            self,
            CsvError::Parse(_) | CsvError::EmptyInput | CsvError::Shape(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CsvError>;
