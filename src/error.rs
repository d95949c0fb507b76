//! Person Gallery - Error Types

use thiserror::Error;

/// Result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Gallery error types
#[derive(Error, Debug)]
pub enum GalleryError {
    // ═══════════════════════════════════════════════════════════════
    // STORE ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Gallery is locked")]
    Locked,

    #[error("No record with image reference: {0}")]
    RecordNotFound(String),

    // ═══════════════════════════════════════════════════════════════
    // AUTH ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Authentication is not available: {0}")]
    AuthUnavailable(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Authentication cancelled")]
    AuthCancelled,

    // ═══════════════════════════════════════════════════════════════
    // FILE ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Image file not found: {0}")]
    ImageNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ═══════════════════════════════════════════════════════════════
    // IMAGE ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Image encoding failed: {0}")]
    ImageEncoding(String),

    #[error("Image decoding failed: {0}")]
    ImageDecoding(String),

    // ═══════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ═══════════════════════════════════════════════════════════════
    // BACKGROUND TASK ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Background task failed: {0}")]
    Background(String),
}

impl GalleryError {
    /// Check if the error should be surfaced to the user as a dialog
    /// rather than resolved to a logged no-op.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            GalleryError::AuthUnavailable(_)
                | GalleryError::AuthFailed(_)
                | GalleryError::AuthCancelled
                | GalleryError::ImageNotFound(_)
                | GalleryError::Io(_)
        )
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(e: serde_json::Error) -> Self {
        GalleryError::Serialization(e.to_string())
    }
}

impl From<image::ImageError> for GalleryError {
    fn from(e: image::ImageError) -> Self {
        GalleryError::ImageEncoding(e.to_string())
    }
}

impl From<tokio::task::JoinError> for GalleryError {
    fn from(e: tokio::task::JoinError) -> Self {
        GalleryError::Background(e.to_string())
    }
}
