//! Error types for logo processing operations

use std::path::Path;
use thiserror::Error;

/// Result type alias for logo processing operations
pub type Result<T> = std::result::Result<T, ProcessingFailure>;

/// Every way a conversion can fail.
///
/// Decode, encode and filesystem failures all end up here. Callers only learn
/// that processing failed and why; the variant is kept for diagnostics.
#[derive(Error, Debug)]
pub enum ProcessingFailure {
    /// Input/output errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding errors
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// Failures inside the conversion itself
    #[error("Processing error: {0}")]
    Processing(String),
}

impl ProcessingFailure {
    /// Create a new processing error
    pub fn processing<S: Into<String>>(msg: S) -> Self {
        Self::Processing(msg.into())
    }

    /// Create file I/O error with operation context
    pub fn file_io_error<P: AsRef<Path>>(operation: &str, path: P, error: &std::io::Error) -> Self {
        let path_display = path.as_ref().display();
        Self::Io(std::io::Error::new(
            error.kind(),
            format!("Failed to {} '{}': {}", operation, path_display, error),
        ))
    }

    /// Create image loading error with format context
    pub fn image_load_error<P: AsRef<Path>>(path: P, error: &image::ImageError) -> Self {
        let path_ref = path.as_ref();
        let extension = path_ref
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");

        Self::processing_stage_error(
            "image decode",
            &error.to_string(),
            Some(&format!("path: {}, extension: {}", path_ref.display(), extension)),
        )
    }

    /// Create PNG save error with destination context
    pub fn image_save_error<P: AsRef<Path>>(path: P, error: &image::ImageError) -> Self {
        Self::processing_stage_error(
            "png encode",
            &error.to_string(),
            Some(&format!("path: {}", path.as_ref().display())),
        )
    }

    /// Create processing error with stage context
    pub fn processing_stage_error(stage: &str, details: &str, input_info: Option<&str>) -> Self {
        let input_context = match input_info {
            Some(info) => format!(" ({})", info),
            None => String::new(),
        };

        Self::Processing(format!(
            "Processing failed at stage '{}'{}: {}",
            stage, input_context, details
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProcessingFailure::processing("pixel buffer size mismatch");
        assert_eq!(
            err.to_string(),
            "Processing error: pixel buffer size mismatch"
        );
    }

    #[test]
    fn test_file_io_error_keeps_kind_and_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist");
        let err = ProcessingFailure::file_io_error("read image file", Path::new("/tmp/logo.png"), &io_error);

        match &err {
            ProcessingFailure::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io variant, got {other:?}"),
        }

        let error_string = err.to_string();
        assert!(error_string.contains("read image file"));
        assert!(error_string.contains("/tmp/logo.png"));
        assert!(error_string.contains("file does not exist"));
    }

    #[test]
    fn test_stage_errors_carry_cause() {
        let cause = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let err = ProcessingFailure::image_save_error("/readonly/out.png", &cause);
        let error_string = err.to_string();
        assert!(error_string.contains("png encode"));
        assert!(error_string.contains("/readonly/out.png"));
        assert!(error_string.contains("access denied"));

        let err = ProcessingFailure::image_load_error("logo.bmp", &cause);
        let error_string = err.to_string();
        assert!(error_string.contains("image decode"));
        assert!(error_string.contains("extension: bmp"));
    }

    #[test]
    fn test_processing_stage_error_without_input_info() {
        let err = ProcessingFailure::processing_stage_error("keying", "empty buffer", None);
        assert_eq!(
            err.to_string(),
            "Processing error: Processing failed at stage 'keying': empty buffer"
        );
    }
}
