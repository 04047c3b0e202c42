use std::path::{Path, PathBuf};

use egui::ColorImage;
use thiserror::Error;

use crate::core::image_format::ImageFormat;

/// Decodes an image file into RGBA pixels.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<ColorImage, LoadError>;
    fn supports_format(&self, format: ImageFormat) -> bool;
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub struct RasterImageLoader;

impl ImageLoader for RasterImageLoader {
    fn load(&self, path: &Path) -> Result<ColorImage, LoadError> {
        use image::ImageReader;

        match ImageFormat::from_path(path) {
            Some(format) if self.supports_format(format) => {}
            _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }

        let io_err = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path)
            .map_err(io_err)?
            .with_guessed_format()
            .map_err(io_err)?;

        let img = reader.decode().map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba_img = img.to_rgba8();
        let size = [rgba_img.width() as usize, rgba_img.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(size, rgba_img.as_raw()))
    }

    fn supports_format(&self, format: ImageFormat) -> bool {
        matches!(format, ImageFormat::Png | ImageFormat::Jpeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn decodes_png_to_rgba() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255])).save(&path).unwrap();

        let image = RasterImageLoader.load(&path).unwrap();
        assert_eq!(image.size, [4, 2]);
        assert_eq!(image.pixels[0], egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn decodes_jpeg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grey.jpg");
        RgbImage::from_pixel(8, 8, Rgb([128, 128, 128])).save(&path).unwrap();

        let image = RasterImageLoader.load(&path).unwrap();
        assert_eq!(image.size, [8, 8]);
    }

    #[test]
    fn corrupt_file_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = RasterImageLoader.load(&path).err().unwrap();
        assert!(matches!(err, LoadError::Decode { .. }), "{err}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = RasterImageLoader.load(&dir.path().join("nope.png")).err().unwrap();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn unknown_suffix_is_rejected_before_reading() {
        let err = RasterImageLoader.load(Path::new("picture.bmp")).err().unwrap();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }
}
