use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockListError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<csv::Error> for StockListError {
    fn from(e: csv::Error) -> Self {
        let msg = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => StockListError::Io(io),
            _ => StockListError::Parse(msg),
        }
    }
}

impl From<serde_json::Error> for StockListError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            StockListError::Io(e.into())
        } else {
            StockListError::Parse(e.to_string())
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, StockListError>;
