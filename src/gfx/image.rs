use crate::error::GameError;
use std::path::Path;

/// Decoded pixel buffer, one packed `0xAARRGGBB` value per pixel
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Image {
    /// Wrap an existing ARGB buffer; the buffer length must be `width * height`
    pub fn from_pixels(pixels: Vec<u32>, width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Image {
            width,
            height,
            pixels,
        }
    }

    pub fn filled(width: u32, height: u32, argb: u32) -> Self {
        Image::from_pixels(vec![argb; (width * height) as usize], width, height)
    }

    /// Load an image from anywhere on disk (map-tester levels, saved creations)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let decoded = image::open(path.as_ref())?.to_rgba8();
        let (width, height) = decoded.dimensions();
        let pixels = decoded
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                u32::from_be_bytes([a, r, g, b])
            })
            .collect();

        Ok(Image::from_pixels(pixels, width, height))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for argb in &self.pixels {
            let [a, r, g, b] = argb.to_be_bytes();
            bytes.extend_from_slice(&[r, g, b, a]);
        }

        let buffer = image::RgbaImage::from_raw(self.width, self.height, bytes)
            .ok_or_else(|| GameError::Platform("pixel buffer does not match image size".into()))?;
        buffer.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, argb: u32) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = argb;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_access_bounds() {
        let mut img = Image::filled(3, 2, 0xffffffff);
        img.set_pixel(2, 1, 0xff000000);
        img.set_pixel(5, 5, 0xff000000);

        assert_eq!(img.pixel(2, 1), Some(0xff000000));
        assert_eq!(img.pixel(0, 0), Some(0xffffffff));
        assert_eq!(img.pixel(3, 0), None);
    }

    #[test]
    fn test_png_keeps_argb_channels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.png");
        let img = Image::from_pixels(vec![0xff000000, 0xffff0000, 0x8000ff00, 0xff0000ff], 2, 2);

        img.save_png(&path).unwrap();
        let loaded = Image::from_path(&path).unwrap();

        assert_eq!(loaded, img);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Image::from_path(dir.path().join("levels/404.png")).is_err());
    }
}
