use std::fmt;

/// Outcome of matching a probe image against the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The gallery has no entries to compare against.
    NoGallery,
    /// The detector found no face in the probe image.
    NoFaceDetected,
    /// The best correlation did not exceed the match threshold.
    Unknown,
    /// The best correlation exceeded the threshold.
    Match { name: String, percent: u32 },
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::NoGallery => write!(f, "no gallery"),
            MatchOutcome::NoFaceDetected => write!(f, "no face detected"),
            MatchOutcome::Unknown => write!(f, "unknown"),
            MatchOutcome::Match { name, percent } => write!(f, "{name} (match: {percent}%)"),
        }
    }
}
