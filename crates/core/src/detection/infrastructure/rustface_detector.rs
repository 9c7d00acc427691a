use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::imageops;
use crate::shared::region::Region;

#[derive(Error, Debug)]
pub enum DetectorInitError {
    #[error("failed to open classifier file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse classifier file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

const MIN_FACE_SIZE: u32 = 20;
const SCORE_THRESH: f64 = 2.0;
const PYRAMID_SCALE_FACTOR: f32 = 0.8;
const SLIDE_WINDOW_STEP: u32 = 4;

/// Face detector backed by the `rustface` crate (SeetaFace funnel-structured
/// cascade).
///
/// Holds the parsed model and rebuilds the scanning engine per call: the
/// engine is stateful and not `Send`, the model is plain data. Frames are
/// converted to grayscale and histogram-equalized before scanning.
pub struct RustfaceDetector {
    model: rustface::Model,
}

impl RustfaceDetector {
    pub fn from_file(path: &Path) -> Result<Self, DetectorInitError> {
        let file = File::open(path).map_err(|e| DetectorInitError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        let model =
            rustface::read_model(BufReader::new(file)).map_err(|e| DetectorInitError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        log::debug!("loaded classifier model from {}", path.display());
        Ok(Self { model })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let gray = frame.to_grayscale();
        let mut pixels = gray.data().to_vec();
        imageops::equalize_hist(&mut pixels);

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(MIN_FACE_SIZE);
        detector.set_score_thresh(SCORE_THRESH);
        detector.set_pyramid_scale_factor(PYRAMID_SCALE_FACTOR);
        detector.set_slide_window_step(SLIDE_WINDOW_STEP, SLIDE_WINDOW_STEP);

        let image = rustface::ImageData::new(&pixels, gray.width(), gray.height());
        let faces = detector.detect(&image);

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                Region::new(bbox.x(), bbox.y(), bbox.width() as i32, bbox.height() as i32)
            })
            .collect())
    }
}
