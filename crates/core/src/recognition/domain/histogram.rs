//! Intensity histograms and their correlation, the sole similarity metric
//! used for matching.

pub const BINS: usize = 256;

/// 256-bin histogram over the intensity range [0, 256), as raw counts.
pub fn intensity_histogram(pixels: &[u8]) -> [f64; BINS] {
    let mut hist = [0.0f64; BINS];
    for &v in pixels {
        hist[v as usize] += 1.0;
    }
    hist
}

/// Pearson correlation coefficient between two equally-binned histograms.
///
/// Returns 1.0 when both inputs have zero variance (identical flat
/// distributions), and 0.0 when only one has zero variance (undefined,
/// treated as uncorrelated).
pub fn correlation(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len()) as f64;
    if n == 0.0 {
        return 0.0;
    }

    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;

    for i in 0..a.len().min(b.len()) {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    let denom = (var_a * var_b).sqrt();
    if denom < f64::EPSILON {
        return if var_a < f64::EPSILON && var_b < f64::EPSILON {
            1.0
        } else {
            0.0
        };
    }

    cov / denom
}
