/// An axis-aligned face bounding box in image pixel coordinates.
///
/// Detector backends may report rectangles that extend past the frame edge,
/// so coordinates are signed; consumers clamp before touching pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersection with a `frame_width` x `frame_height` frame, or `None`
    /// when the rectangle lies entirely outside it.
    pub fn clamped_to(&self, frame_width: u32, frame_height: u32) -> Option<Region> {
        let x1 = self.x.max(0);
        let y1 = self.y.max(0);
        let x2 = self.x.saturating_add(self.width).min(frame_width as i32);
        let y2 = self.y.saturating_add(self.height).min(frame_height as i32);

        if x2 <= x1 || y2 <= y1 {
            return None;
        }
        Some(Region::new(x1, y1, x2 - x1, y2 - y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_clamp_interior_region_unchanged() {
        let r = Region::new(10, 10, 20, 20);
        assert_eq!(r.clamped_to(100, 100), Some(r));
    }

    #[test]
    fn test_clamp_negative_origin() {
        let r = Region::new(-5, -5, 20, 20);
        assert_eq!(r.clamped_to(100, 100), Some(Region::new(0, 0, 15, 15)));
    }

    #[test]
    fn test_clamp_overhanging_edge() {
        let r = Region::new(90, 95, 20, 20);
        assert_eq!(r.clamped_to(100, 100), Some(Region::new(90, 95, 10, 5)));
    }

    #[rstest]
    #[case::right_of_frame(Region::new(100, 0, 10, 10))]
    #[case::below_frame(Region::new(0, 100, 10, 10))]
    #[case::zero_width(Region::new(10, 10, 0, 10))]
    #[case::zero_height(Region::new(10, 10, 10, 0))]
    #[case::negative_size(Region::new(10, 10, -5, -5))]
    fn test_clamp_empty_intersection(#[case] r: Region) {
        assert_eq!(r.clamped_to(100, 100), None);
    }
}
