//! Face enrollment and histogram-correlation matching.
//!
//! The detector is a pluggable black box behind
//! [`detection::domain::face_detector::FaceDetector`]; the gallery, its
//! preprocessing, and the matcher live under [`recognition`]; and
//! [`pipeline`] wires them into the enroll/recognize operations that
//! callers drive with frames from a
//! [`capture::domain::frame_source::FrameSource`].

pub mod capture;
pub mod detection;
pub mod pipeline;
pub mod recognition;
pub mod shared;
