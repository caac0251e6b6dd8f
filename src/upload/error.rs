use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file uploaded")]
    Missing,

    #[error("File is empty")]
    Empty,

    #[error("File too large (max: {max} bytes)")]
    TooLarge { max: usize },

    #[error("Processing error: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("Processing error: {0}")]
    Io(String),
}

impl UploadError {
    /// Missing, empty and oversized uploads are the caller's fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            UploadError::Missing | UploadError::Empty | UploadError::TooLarge { .. }
        )
    }
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        UploadError::Io(err.to_string())
    }
}
