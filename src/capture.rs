//! Person Gallery - Image Capture Provider
//!
//! Host-side source of raw images. On a phone this is the native photo
//! picker or camera; on the CLI it is a path on disk. Cancellation at
//! either stage is a silent no-op for the store.

use std::path::PathBuf;

use crate::compress::RawImage;
use crate::error::{GalleryError, GalleryResult};

/// Where the user chose to capture from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChosenSource {
    Photos,
    Camera,
    Cancelled,
}

/// Host-side capture provider.
pub trait CaptureProvider: Send + Sync {
    /// Whether a camera source exists on this host. Without one, the
    /// photo library is used directly and no choice is offered.
    fn camera_available(&self) -> bool;

    /// Ask the user which source to capture from.
    fn present_source_choice(&self, camera_available: bool) -> ChosenSource;

    /// Run the capture flow; `None` means the user cancelled.
    fn capture(&self, source: ChosenSource) -> GalleryResult<Option<RawImage>>;
}

/// Capture provider that reads an image file from disk (CLI host).
pub struct FileCaptureProvider {
    path: PathBuf,
}

impl FileCaptureProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CaptureProvider for FileCaptureProvider {
    fn camera_available(&self) -> bool {
        false
    }

    fn present_source_choice(&self, _camera_available: bool) -> ChosenSource {
        ChosenSource::Photos
    }

    fn capture(&self, source: ChosenSource) -> GalleryResult<Option<RawImage>> {
        if source == ChosenSource::Cancelled {
            return Ok(None);
        }

        let img = image::open(&self.path)
            .map_err(|e| GalleryError::ImageDecoding(e.to_string()))?;
        Ok(Some(img))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_file_provider_loads_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.png");

        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3])));
        img.save(&path).unwrap();

        let provider = FileCaptureProvider::new(path);
        assert!(!provider.camera_available());

        let captured = provider.capture(ChosenSource::Photos).unwrap();
        assert!(captured.is_some());
    }

    #[test]
    fn test_cancelled_capture_is_none() {
        let provider = FileCaptureProvider::new(PathBuf::from("unused"));
        assert!(provider.capture(ChosenSource::Cancelled).unwrap().is_none());
    }

    #[test]
    fn test_unreadable_image_is_error() {
        let provider = FileCaptureProvider::new(PathBuf::from("/no/such/file.png"));
        assert!(provider.capture(ChosenSource::Photos).is_err());
    }
}
