use thiserror::Error;

pub type Result<T> = std::result::Result<T, JcdecauxError>;

/// Errors from loading, parsing or fetching station data.
#[derive(Debug, Error)]
pub enum JcdecauxError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("timestamp parse error: {0}")]
    TimeParse(#[from] chrono::ParseError),

    #[error("invalid record format: {0}")]
    InvalidFormat(String),

    #[error("missing configuration: {0} is not set")]
    MissingConfig(String),

    #[cfg(feature = "api")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
