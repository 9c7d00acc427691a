use thiserror::Error;

use crate::detection::domain::face_detector::FaceDetector;
use crate::recognition::domain::face_matcher::FaceMatcher;
use crate::recognition::domain::gallery::Gallery;
use crate::recognition::domain::match_outcome::MatchOutcome;
use crate::recognition::domain::preprocessor::{self, PreprocessError};
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum RecognizeError {
    #[error("face detection failed: {0}")]
    Detection(String),
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),
}

/// Matching pipeline: gallery guard → detect → preprocess probe → correlate.
pub struct RecognizeFaceUseCase {
    detector: Box<dyn FaceDetector>,
    matcher: FaceMatcher,
}

impl RecognizeFaceUseCase {
    pub fn new(detector: Box<dyn FaceDetector>, matcher: FaceMatcher) -> Self {
        Self { detector, matcher }
    }

    /// An empty gallery answers `NoGallery` before the detector ever runs;
    /// a frame with no detectable face answers `NoFaceDetected` regardless
    /// of gallery contents.
    pub fn execute(
        &mut self,
        gallery: &Gallery,
        frame: &Frame,
    ) -> Result<MatchOutcome, RecognizeError> {
        if gallery.is_empty() {
            return Ok(MatchOutcome::NoGallery);
        }

        let regions = self
            .detector
            .detect(frame)
            .map_err(|e| RecognizeError::Detection(e.to_string()))?;
        let Some(region) = regions.first() else {
            return Ok(MatchOutcome::NoFaceDetected);
        };

        let probe = preprocessor::preprocess_face(frame, region)?;
        let outcome = self.matcher.match_probe(gallery, &probe);
        log::debug!("recognition outcome: {outcome}");
        Ok(outcome)
    }
}
