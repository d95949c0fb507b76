//! Person Gallery - Image Compression
//!
//! Turns a captured raw image into the opaque compressed blob that goes
//! to the documents directory. JPEG at quality 80, matching what the
//! shipped app wrote.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::error::{GalleryError, GalleryResult};

/// JPEG quality for stored images.
const JPEG_QUALITY: u8 = 80;

/// A raw image as handed over by the capture provider.
pub type RawImage = DynamicImage;

/// Encode a raw image to its stored JPEG form.
pub fn compress(image: &RawImage) -> GalleryResult<Vec<u8>> {
    let mut output = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut output), JPEG_QUALITY);

    image
        .write_with_encoder(encoder)
        .map_err(|e| GalleryError::ImageEncoding(e.to_string()))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_compress_produces_jpeg() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, image::Rgb([200, 10, 10])));
        let bytes = compress(&img).unwrap();

        assert!(!bytes.is_empty());
        // JPEG SOI marker
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }
}
