use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocwatchError {
    #[error("Document name is required")]
    EmptyName,

    #[error("Expiration date is required")]
    MissingExpiration,

    #[error("Alert lead time must be a whole number of days, zero or more (got '{0}')")]
    InvalidAlertLeadDays(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Cannot export reminders: {0}")]
    InvalidRecordForExport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DocwatchError>;
