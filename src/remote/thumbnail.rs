use iced::widget::image::Handle;
use image::imageops::FilterType;

use crate::error::Result;

/// A downloaded photo, ready for display
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Downscaled RGBA pixels for grid tiles
    pub thumbnail: Handle,
    /// The original encoded bytes, decoded lazily by the renderer for the modal
    pub full: Handle,
    /// Thumbnail dimensions
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

/// Decode downloaded image bytes and build both display handles.
///
/// The thumbnail keeps the aspect ratio and fits inside a
/// `max_edge` x `max_edge` square; images already smaller are not upscaled.
pub fn decode(bytes: Vec<u8>, max_edge: u32) -> Result<LoadedImage> {
    let img = image::load_from_memory(&bytes)?;

    let thumbnail = if img.width() > max_edge || img.height() > max_edge {
        img.resize(max_edge, max_edge, FilterType::Triangle)
    } else {
        img
    };

    let rgba = thumbnail.to_rgba8();
    let (thumbnail_width, thumbnail_height) = rgba.dimensions();

    Ok(LoadedImage {
        thumbnail: Handle::from_rgba(thumbnail_width, thumbnail_height, rgba.into_raw()),
        full: Handle::from_bytes(bytes),
        thumbnail_width,
        thumbnail_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 90]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_large_image_is_downscaled_keeping_aspect() {
        let loaded = decode(encoded_png(400, 200), 100).unwrap();
        assert_eq!((loaded.thumbnail_width, loaded.thumbnail_height), (100, 50));
    }

    #[test]
    fn test_small_image_is_not_upscaled() {
        let loaded = decode(encoded_png(30, 20), 100).unwrap();
        assert_eq!((loaded.thumbnail_width, loaded.thumbnail_height), (30, 20));
    }

    #[test]
    fn test_garbage_bytes_are_an_image_error() {
        let err = decode(b"definitely not an image".to_vec(), 100).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
