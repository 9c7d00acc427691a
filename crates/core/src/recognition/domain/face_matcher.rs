use crate::recognition::domain::face_image::FaceImage;
use crate::recognition::domain::gallery::Gallery;
use crate::recognition::domain::histogram;
use crate::recognition::domain::match_outcome::MatchOutcome;

pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Histogram-correlation matcher over the gallery.
///
/// Correlation of equalized grayscale histograms is a weak similarity proxy
/// rather than a real recognition feature; it stays because it is cheap,
/// fully reproducible, and needs no training step.
pub struct FaceMatcher {
    threshold: f64,
}

impl FaceMatcher {
    /// A match must exceed `threshold` strictly; a best correlation exactly
    /// at it still answers unknown.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Compares the probe against every entry in append order, keeping the
    /// strict maximum so the earliest entry wins ties. An entry whose label
    /// has no recorded name matches with an empty name.
    pub fn match_probe(&self, gallery: &Gallery, probe: &FaceImage) -> MatchOutcome {
        let probe_hist = histogram::intensity_histogram(probe.pixels());

        let mut best = f64::NEG_INFINITY;
        let mut best_name = String::new();
        for entry in gallery.entries() {
            let entry_hist = histogram::intensity_histogram(entry.image.pixels());
            let corr = histogram::correlation(&probe_hist, &entry_hist);
            if corr > best {
                best = corr;
                best_name = gallery
                    .name_of(entry.label)
                    .unwrap_or_default()
                    .to_string();
            }
        }

        if best > self.threshold {
            MatchOutcome::Match {
                name: best_name,
                percent: (best * 100.0).round() as u32,
            }
        } else {
            MatchOutcome::Unknown
        }
    }
}

impl Default for FaceMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::domain::gallery::GalleryEntry;
    use std::collections::BTreeMap;

    /// Canvas with a two-level pixel split: `bright` of 10_000 pixels are
    /// 255, the rest 0. Varying `bright` varies the histogram shape.
    fn two_level_image(bright: usize) -> FaceImage {
        let mut pixels = vec![0u8; FaceImage::PIXEL_COUNT];
        for p in pixels.iter_mut().take(bright) {
            *p = 255;
        }
        FaceImage::from_pixels(pixels).unwrap()
    }

    fn correlation_between(a: &FaceImage, b: &FaceImage) -> f64 {
        histogram::correlation(
            &histogram::intensity_histogram(a.pixels()),
            &histogram::intensity_histogram(b.pixels()),
        )
    }

    #[test]
    fn test_identical_image_matches_at_100_percent() {
        let mut gallery = Gallery::new();
        let face = two_level_image(4_000);
        gallery.add("alice", face.clone());

        let outcome = FaceMatcher::default().match_probe(&gallery, &face);
        assert_eq!(
            outcome,
            MatchOutcome::Match {
                name: "alice".to_string(),
                percent: 100,
            }
        );
    }

    #[test]
    fn test_dissimilar_image_is_unknown() {
        let mut gallery = Gallery::new();
        gallery.add("alice", two_level_image(9_900));

        let outcome = FaceMatcher::default().match_probe(&gallery, &two_level_image(100));
        assert_eq!(outcome, MatchOutcome::Unknown);
    }

    #[test]
    fn test_tie_keeps_first_entry() {
        let face = two_level_image(4_000);
        let mut gallery = Gallery::new();
        gallery.add("first", face.clone());
        gallery.add("second", face.clone());

        let outcome = FaceMatcher::default().match_probe(&gallery, &face);
        assert_eq!(
            outcome,
            MatchOutcome::Match {
                name: "first".to_string(),
                percent: 100,
            }
        );
    }

    #[test]
    fn test_best_of_several_entries_wins() {
        let probe = two_level_image(4_000);
        let mut gallery = Gallery::new();
        gallery.add("far", two_level_image(9_000));
        gallery.add("near", probe.clone());

        let outcome = FaceMatcher::default().match_probe(&gallery, &probe);
        assert!(matches!(outcome, MatchOutcome::Match { name, .. } if name == "near"));
    }

    #[test]
    fn test_correlation_exactly_at_threshold_is_unknown() {
        // Pin the threshold to the measured correlation: strict `>` must
        // classify the boundary itself as unknown.
        let probe = two_level_image(4_000);
        let stored = two_level_image(6_000);
        let corr = correlation_between(&probe, &stored);
        assert!(corr.is_finite());

        let mut gallery = Gallery::new();
        gallery.add("alice", stored);

        let at_boundary = FaceMatcher::new(corr).match_probe(&gallery, &probe);
        assert_eq!(at_boundary, MatchOutcome::Unknown);

        let just_below = FaceMatcher::new(corr - 1e-9).match_probe(&gallery, &probe);
        assert!(matches!(just_below, MatchOutcome::Match { .. }));
    }

    #[test]
    fn test_entry_without_name_matches_with_empty_name() {
        // A gallery loaded without its companion mapping keeps matching,
        // just namelessly.
        let face = two_level_image(4_000);
        let gallery = Gallery::from_parts(
            vec![GalleryEntry {
                label: 0,
                image: face.clone(),
            }],
            BTreeMap::new(),
        );

        let outcome = FaceMatcher::default().match_probe(&gallery, &face);
        assert_eq!(
            outcome,
            MatchOutcome::Match {
                name: String::new(),
                percent: 100,
            }
        );
    }

    #[test]
    fn test_empty_gallery_is_unknown() {
        // Callers guard with NoGallery first; the matcher itself degrades
        // to unknown.
        let outcome = FaceMatcher::default().match_probe(&Gallery::new(), &two_level_image(500));
        assert_eq!(outcome, MatchOutcome::Unknown);
    }

    #[test]
    fn test_percent_is_rounded() {
        let probe = two_level_image(4_000);
        let stored = two_level_image(4_100);
        let corr = correlation_between(&probe, &stored);
        assert!(corr > 0.7, "fixture images must correlate strongly");

        let mut gallery = Gallery::new();
        gallery.add("alice", stored);

        let outcome = FaceMatcher::default().match_probe(&gallery, &probe);
        let expected = (corr * 100.0).round() as u32;
        assert_eq!(
            outcome,
            MatchOutcome::Match {
                name: "alice".to_string(),
                percent: expected,
            }
        );
    }
}
