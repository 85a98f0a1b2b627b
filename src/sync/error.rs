//! Sync Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest {} is not valid JSON: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {} has no \"version\" field", path.display())]
    MissingVersion { path: PathBuf },

    #[error("Cannot build plugin pattern: {source}")]
    Pattern {
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        SyncError::Config {
            message: message.into(),
        }
    }
}

impl crate::core::error_handling::ContextualError for SyncError {
    fn is_user_actionable(&self) -> bool {
        match self {
            SyncError::ManifestParse { .. } => true, // User can fix the manifest
            SyncError::MissingVersion { .. } => true,
            SyncError::Config { .. } => true,
            SyncError::Io { .. } => false,      // System IO issues
            SyncError::Pattern { .. } => false, // Should not happen for escaped literals
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            SyncError::Config { message } => Some(message),
            // Display already names the manifest path
            _ => None,
        }
    }
}

/// Result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;
