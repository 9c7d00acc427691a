use thiserror::Error;

use crate::recognition::domain::face_image::FaceImage;
use crate::shared::frame::Frame;
use crate::shared::imageops;
use crate::shared::region::Region;

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("face region {0:?} lies outside the frame")]
    RegionOutsideFrame(Region),
}

/// Reduces a detected face to the canonical matching canvas: crop, grayscale
/// conversion (a no-op for single-channel frames), straight bilinear resize
/// to 100x100, histogram equalization. Enrollment and probing must run the
/// exact same steps for their histograms to be comparable.
pub fn preprocess_face(frame: &Frame, region: &Region) -> Result<FaceImage, PreprocessError> {
    let crop = frame
        .crop(region)
        .ok_or(PreprocessError::RegionOutsideFrame(*region))?;
    let gray = crop.to_grayscale();

    let mut pixels = imageops::resize_bilinear(
        gray.data(),
        gray.width() as usize,
        gray.height() as usize,
        FaceImage::SIZE as usize,
        FaceImage::SIZE as usize,
    );
    imageops::equalize_hist(&mut pixels);

    Ok(FaceImage::from_pixels(pixels).expect("resize yields the canonical pixel count"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_frame(width: u32, height: u32, fill: u8) -> Frame {
        Frame::new(vec![fill; (width * height) as usize], width, height, 1)
    }

    #[test]
    fn test_output_is_canonical_canvas() {
        let frame = gray_frame(640, 480, 128);
        let face = preprocess_face(&frame, &Region::new(100, 100, 50, 80)).unwrap();
        assert_eq!(face.pixels().len(), FaceImage::PIXEL_COUNT);
    }

    #[test]
    fn test_uniform_crop_stays_uniform() {
        // Uniform input survives resize and is left alone by equalization
        let frame = gray_frame(200, 200, 77);
        let face = preprocess_face(&frame, &Region::new(10, 10, 60, 60)).unwrap();
        assert!(face.pixels().iter().all(|&v| v == 77));
    }

    #[test]
    fn test_color_and_gray_inputs_agree() {
        // An RGB frame with equal channels must preprocess identically to
        // its grayscale counterpart
        let gray = Frame::new(vec![90u8; 120 * 120], 120, 120, 1);
        let color = Frame::new(vec![90u8; 120 * 120 * 3], 120, 120, 3);
        let region = Region::new(5, 5, 100, 110);

        let from_gray = preprocess_face(&gray, &region).unwrap();
        let from_color = preprocess_face(&color, &region).unwrap();
        assert_eq!(from_gray, from_color);
    }

    #[test]
    fn test_non_square_region_is_stretched() {
        // A 2:1 region still lands on the square canvas; the left/right
        // halves of a vertically-split crop keep their sides.
        let mut pixels = vec![0u8; 200 * 50];
        for row in 0..50 {
            for col in 100..200 {
                pixels[row * 200 + col] = 255;
            }
        }
        let frame = Frame::new(pixels, 200, 50, 1);
        let face = preprocess_face(&frame, &Region::new(0, 0, 200, 50)).unwrap();

        let size = FaceImage::SIZE as usize;
        assert_eq!(face.pixels()[0], 0); // top-left
        assert_eq!(face.pixels()[size - 1], 255); // top-right
        assert_eq!(face.pixels()[size * size - size], 0); // bottom-left
        assert_eq!(face.pixels()[size * size - 1], 255); // bottom-right
    }

    #[test]
    fn test_region_overhanging_frame_is_clamped() {
        let frame = gray_frame(100, 100, 50);
        let face = preprocess_face(&frame, &Region::new(80, 80, 60, 60)).unwrap();
        assert_eq!(face.pixels().len(), FaceImage::PIXEL_COUNT);
    }

    #[test]
    fn test_region_outside_frame_is_error() {
        let frame = gray_frame(100, 100, 50);
        let result = preprocess_face(&frame, &Region::new(200, 200, 60, 60));
        assert!(matches!(
            result,
            Err(PreprocessError::RegionOutsideFrame(_))
        ));
    }

    #[test]
    fn test_equalization_spreads_crop_contrast() {
        // A dim two-level crop must come out stretched to the full range
        let mut pixels = vec![100u8; 100 * 100];
        for p in pixels.iter_mut().take(5_000) {
            *p = 120;
        }
        let frame = Frame::new(pixels, 100, 100, 1);
        let face = preprocess_face(&frame, &Region::new(0, 0, 100, 100)).unwrap();

        assert!(face.pixels().contains(&0));
        assert!(face.pixels().contains(&255));
    }
}
