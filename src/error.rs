use thiserror::Error;

/// Errors raised while resolving, reading, or prompting for bikeshare data.
#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("malformed start time {value:?} at data row {row}")]
    MalformedTimestamp { row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end of file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
