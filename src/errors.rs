//! Error types for sortty
//!
//! Sorting and playback are infallible; errors only come from building the
//! configuration (array bounds, speed, settings file) and from terminal I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or launching the visualizer
#[derive(Error, Debug)]
pub enum SorttyError {
    /// Array length or value bounds are unusable
    #[error("Invalid array configuration: {reason}")]
    InvalidArrayConfig { reason: String },

    /// Speed slider position outside 1..=1999
    #[error("Invalid speed slider position {position}: expected 1..=1999")]
    InvalidSlider { position: u32 },

    /// Settings file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`crate::config::Settings`]
    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SorttyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = SorttyError::InvalidSlider { position: 2500 };
        assert_eq!(
            err.to_string(),
            "Invalid speed slider position 2500: expected 1..=1999"
        );

        let err = SorttyError::InvalidArrayConfig {
            reason: "min 10 is greater than max 5".to_string(),
        };
        assert!(err.to_string().contains("min 10 is greater than max 5"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: SorttyError = io.into();
        assert!(matches!(err, SorttyError::Io(_)));
    }
}
