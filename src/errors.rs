use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// An input token is not a valid entry identifier (1-based position)
    #[error("Invalid entry identifier {position}: {token}")]
    InvalidIdentifier { position: usize, token: String },
    /// Region selector not in the mirror registry
    #[error("No such mirror: {0}")]
    UnknownRegion(String),
    /// File format not in the supported set
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    /// Could not open the control connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
    /// Login rejected by the mirror
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
    /// Session did not close cleanly
    #[error("Disconnect error: {0}")]
    DisconnectError(String),
    /// Remote retrieval failed
    #[error("Transfer error: {0}")]
    TransferError(String),
    /// Payload is not valid gzip
    #[error("Decompression error: {0}")]
    DecompressError(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<suppaftp::FtpError> for AppError {
    fn from(err: suppaftp::FtpError) -> Self {
        AppError::TransferError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
