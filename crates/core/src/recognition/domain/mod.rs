pub mod face_image;
pub mod face_matcher;
pub mod gallery;
pub mod histogram;
pub mod match_outcome;
pub mod preprocessor;
