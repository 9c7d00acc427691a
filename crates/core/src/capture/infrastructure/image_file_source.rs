use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::capture::domain::frame_source::FrameSource;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum ImageFileSourceError {
    #[error("failed to read image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Adapts a single still-image file to the [`FrameSource`] seam.
///
/// The file is decoded once at `open`; `current_frame` re-serves that frame,
/// standing in for "the most recently captured frame" of a live device.
/// Grayscale files stay single-channel, everything else is decoded to RGB.
pub struct ImageFileSource {
    frame: Frame,
}

impl ImageFileSource {
    pub fn open(path: &Path) -> Result<Self, ImageFileSourceError> {
        let decoded = image::open(path).map_err(|e| ImageFileSourceError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

        let frame = match decoded {
            image::DynamicImage::ImageLuma8(gray) => {
                let (width, height) = gray.dimensions();
                Frame::new(gray.into_raw(), width, height, 1)
            }
            other => {
                let rgb = other.to_rgb8();
                let (width, height) = rgb.dimensions();
                Frame::new(rgb.into_raw(), width, height, 3)
            }
        };
        Ok(Self { frame })
    }
}

impl FrameSource for ImageFileSource {
    fn current_frame(&mut self) -> Result<Frame, Box<dyn std::error::Error>> {
        Ok(self.frame.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_rgb_image(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("test.png");
        let mut img = image::RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([50, 100, 200]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_open_decodes_rgb_frame() {
        let tmp = TempDir::new().unwrap();
        let path = write_rgb_image(tmp.path(), 64, 48);

        let mut source = ImageFileSource::open(&path).unwrap();
        let frame = source.current_frame().unwrap();
        assert_eq!(frame.width(), 64);
        assert_eq!(frame.height(), 48);
        assert_eq!(frame.channels(), 3);
        assert_eq!(&frame.data()[..3], &[50, 100, 200]);
    }

    #[test]
    fn test_grayscale_file_stays_single_channel() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gray.png");
        let img = image::GrayImage::from_pixel(32, 32, image::Luma([77]));
        img.save(&path).unwrap();

        let mut source = ImageFileSource::open(&path).unwrap();
        let frame = source.current_frame().unwrap();
        assert_eq!(frame.channels(), 1);
        assert!(frame.data().iter().all(|&v| v == 77));
    }

    #[test]
    fn test_current_frame_is_repeatable() {
        let tmp = TempDir::new().unwrap();
        let path = write_rgb_image(tmp.path(), 16, 16);

        let mut source = ImageFileSource::open(&path).unwrap();
        let first = source.current_frame().unwrap();
        let second = source.current_frame().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_open_missing_file_is_error() {
        let result = ImageFileSource::open(Path::new("/nonexistent/test.png"));
        assert!(matches!(result, Err(ImageFileSourceError::Decode { .. })));
    }
}
