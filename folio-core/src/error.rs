use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_error_display() {
        let error = FolioError::FontError("missing metrics".to_string());
        assert_eq!(error.to_string(), "Font error: missing metrics");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let error = FolioError::from(io_error);

        match error {
            FolioError::Io(ref err) => {
                assert_eq!(err.kind(), ErrorKind::NotFound);
            }
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_all_variants_display() {
        let errors = vec![
            FolioError::FontError("font".to_string()),
            FolioError::EncodingError("encoding".to_string()),
            FolioError::InvalidGeometry("zero width".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FolioError>();
    }
}
