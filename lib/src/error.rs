//! Error types shared by every stage of the conversion pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while acquiring, converting or saving an image
#[derive(Debug, Error)]
pub enum AsciiError {
    /// URL does not start with `http`
    #[error("invalid URL '{0}': include 'http://' or 'https://' at the beginning")]
    InvalidUrl(String),

    /// Ran out of attempts while re-prompting for input
    #[error("no valid input after {attempts} attempts")]
    ValidationFailed { attempts: u32 },

    /// Network request failed or returned a non-success status
    #[error("failed to fetch image: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Response body is not a decodable image
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("the ASCII character set must have at least 2 characters, got {0}")]
    PaletteTooShort(usize),

    #[error("downscale factor must be an integer between 1 and 10, got '{0}'")]
    InvalidDownscale(String),

    #[error("unrecognized color channel '{0}' (expected red, green or blue)")]
    UnknownChannel(String),

    #[error("invalid output filename '{0}'")]
    InvalidFilename(String),

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsciiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_mentions_path() {
        let err = AsciiError::Write {
            path: PathBuf::from("outputs/cat.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("outputs/cat.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_palette_error_reports_length() {
        let err = AsciiError::PaletteTooShort(1);
        assert!(err.to_string().contains("at least 2"));
    }
}
