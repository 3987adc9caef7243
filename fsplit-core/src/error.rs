use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsplitError {
    #[error("Missing file: {0}")]
    SourceNotFound(String),

    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, FsplitError>;
