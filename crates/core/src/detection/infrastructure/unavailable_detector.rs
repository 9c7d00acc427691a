use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Stand-in detector for when no classifier data file could be resolved.
///
/// Always reports zero faces, so enrolling and matching degrade to their
/// "no face detected" answers. The component is uninitialized, not broken.
pub struct UnavailableDetector;

impl FaceDetector for UnavailableDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_returns_empty() {
        let mut detector = UnavailableDetector;
        let frame = Frame::new(vec![128u8; 16], 4, 4, 1);
        assert!(detector.detect(&frame).unwrap().is_empty());
    }

    #[test]
    fn test_empty_for_color_frames_too() {
        let mut detector = UnavailableDetector;
        let frame = Frame::new(vec![128u8; 4 * 4 * 3], 4, 4, 3);
        assert!(detector.detect(&frame).unwrap().is_empty());
    }
}
