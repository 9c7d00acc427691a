use thiserror::Error;

#[derive(Error, Debug)]
#[error("face image must contain exactly {expected} bytes, got {actual}")]
pub struct WrongPixelCount {
    pub expected: usize,
    pub actual: usize,
}

/// The processed face canvas: 100x100 single-channel pixels, grayscale and
/// histogram-equalized. Created by preprocessing, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceImage {
    pixels: Vec<u8>,
}

impl FaceImage {
    /// Side length of the canvas.
    pub const SIZE: u32 = 100;

    pub const PIXEL_COUNT: usize = (Self::SIZE * Self::SIZE) as usize;

    pub fn from_pixels(pixels: Vec<u8>) -> Result<Self, WrongPixelCount> {
        if pixels.len() != Self::PIXEL_COUNT {
            return Err(WrongPixelCount {
                expected: Self::PIXEL_COUNT,
                actual: pixels.len(),
            });
        }
        Ok(Self { pixels })
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
