use thiserror::Error;

use crate::detection::domain::face_detector::FaceDetector;
use crate::recognition::domain::gallery::Gallery;
use crate::recognition::domain::preprocessor::{self, PreprocessError};
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum EnrollError {
    #[error("no face detected in the supplied image")]
    NoFaceDetected,
    #[error("face detection failed: {0}")]
    Detection(String),
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),
}

/// Enrollment pipeline: detect → take first face → preprocess → append.
pub struct EnrollFaceUseCase {
    detector: Box<dyn FaceDetector>,
}

impl EnrollFaceUseCase {
    pub fn new(detector: Box<dyn FaceDetector>) -> Self {
        Self { detector }
    }

    /// Adds one face to the gallery under `name` and returns the assigned
    /// label. The first rectangle in detector output order is used, and
    /// nothing deduplicates repeated enrollments of the same name.
    pub fn execute(
        &mut self,
        gallery: &mut Gallery,
        name: &str,
        frame: &Frame,
    ) -> Result<u32, EnrollError> {
        let regions = self
            .detector
            .detect(frame)
            .map_err(|e| EnrollError::Detection(e.to_string()))?;
        let Some(region) = regions.first() else {
            return Err(EnrollError::NoFaceDetected);
        };

        let face = preprocessor::preprocess_face(frame, region)?;
        let label = gallery.add(name, face);
        log::info!("enrolled '{name}' as label {label}");
        Ok(label)
    }
}
