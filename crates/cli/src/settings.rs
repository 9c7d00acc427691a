use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use facematch_core::recognition::domain::face_matcher::DEFAULT_THRESHOLD;

/// Persisted CLI defaults. Flags override these; a missing or unreadable
/// settings file falls back to built-in defaults without complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Gallery file used when --gallery is not given.
    pub gallery: Option<PathBuf>,
    /// Classifier model file used when --model is not given.
    pub model: Option<PathBuf>,
    /// Correlation threshold a match must exceed.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gallery: None,
            model: None,
            threshold: default_threshold(),
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("FaceMatch").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                let _ = fs::write(path, json);
            }
        }
    }

    /// Gallery location when neither flag nor settings specify one.
    pub fn gallery_path(&self) -> PathBuf {
        self.gallery.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("FaceMatch")
                .join("gallery.bin")
        })
    }
}
