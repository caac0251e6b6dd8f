mod error;


pub use error::UploadError;

use std::io::Read;

/// Validate and decode uploaded content before it reaches the analyzer
///
/// # Arguments
/// * `bytes` - Uploaded content, `None` when nothing was supplied
///
/// # Returns
/// The content as UTF-8 text, or the reason it cannot be analyzed
pub fn decode_upload(bytes: Option<&[u8]>) -> Result<&str, UploadError> {
    let bytes = bytes.ok_or(UploadError::Missing)?;
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    Ok(std::str::from_utf8(bytes)?)
}

/// Drain a reader completely, mapping read failures to `UploadError::Io`
pub fn read_upload(mut reader: impl Read) -> Result<Vec<u8>, UploadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}
