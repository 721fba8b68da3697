use thiserror::Error;

/// Failures while reading a Pluxee export. Row numbers are 1-based line
/// numbers counted from the first line after the header, blank lines included.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("statement has no header line")]
    MissingHeader,

    #[error("row {row}: CSV error: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: missing {field} column (index {index}, row has {found} fields)")]
    MalformedRow {
        row: usize,
        field: &'static str,
        index: usize,
        found: usize,
    },

    #[error("row {row}: invalid date {value:?}: {source}")]
    Date {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("row {row}: invalid amount {value:?}: {source}")]
    Amount {
        row: usize,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
