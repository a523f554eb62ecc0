use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage rejected write: {0}")]
    WriteRejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized theme value: {0:?}")]
    InvalidTheme(String),

    #[error("Config error on line {line}: {message}")]
    Config { line: usize, message: String },
}

/// Convenience type alias for Results with SiteError
pub type Result<T> = std::result::Result<T, SiteError>;
