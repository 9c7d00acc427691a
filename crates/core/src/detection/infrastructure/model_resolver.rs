use std::path::{Path, PathBuf};

use crate::shared::constants::CASCADE_MODEL_FILENAME;

/// Locates the classifier data file by probing a short fixed list of
/// locations in order. Nothing is downloaded: when no candidate exists the
/// caller is expected to fall back to the unavailable detector, so
/// detection-dependent operations answer "no face detected" instead of
/// erroring.
///
/// Probe order:
/// 1. the working directory
/// 2. a `models/` subdirectory of the working directory
/// 3. the platform cache directory (`…/FaceMatch/models/`)
pub fn resolve() -> Option<PathBuf> {
    resolve_from(&candidate_paths())
}

/// First candidate that exists on disk.
pub fn resolve_from(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.is_file()).cloned()
}

pub fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(CASCADE_MODEL_FILENAME),
        Path::new("models").join(CASCADE_MODEL_FILENAME),
    ];
    if let Some(dir) = dirs::cache_dir() {
        candidates.push(dir.join("FaceMatch").join("models").join(CASCADE_MODEL_FILENAME));
    }
    candidates
}
