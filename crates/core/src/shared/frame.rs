use crate::shared::imageops;
use crate::shared::region::Region;

/// A single still frame: contiguous pixel bytes in row-major order.
///
/// `channels` is 1 (grayscale) or 3 (interleaved RGB). Format conversion
/// happens at I/O boundaries only; the domain layer treats pixel data as
/// opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert!(channels == 1 || channels == 3, "channels must be 1 or 3");
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn is_grayscale(&self) -> bool {
        self.channels == 1
    }

    /// BT.601 luma conversion. Single-channel frames copy through unchanged.
    pub fn to_grayscale(&self) -> Frame {
        if self.is_grayscale() {
            return self.clone();
        }
        Frame::new(
            imageops::rgb_to_luma(&self.data),
            self.width,
            self.height,
            1,
        )
    }

    /// Copies the pixels under `region`, clamped to the frame bounds.
    ///
    /// Returns `None` when the clamped region is empty.
    pub fn crop(&self, region: &Region) -> Option<Frame> {
        let clamped = region.clamped_to(self.width, self.height)?;
        let (x, y) = (clamped.x as usize, clamped.y as usize);
        let (w, h) = (clamped.width as usize, clamped.height as usize);
        let ch = self.channels as usize;
        let stride = self.width as usize * ch;

        let mut out = Vec::with_capacity(w * h * ch);
        for row in 0..h {
            let start = (y + row) * stride + x * ch;
            out.extend_from_slice(&self.data[start..start + w * ch]);
        }
        Some(Frame::new(out, w as u32, h as u32, self.channels))
    }
}
