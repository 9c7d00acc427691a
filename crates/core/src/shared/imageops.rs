//! Pixel-level building blocks shared by detection and recognition.

/// BT.601 luma conversion of an interleaved RGB buffer.
pub fn rgb_to_luma(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .map(|px| {
            let y = 0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64;
            y.round().clamp(0.0, 255.0) as u8
        })
        .collect()
}

/// Straight bilinear resize of a single-channel image.
///
/// Each axis is stretched to the target independently; aspect ratio is
/// intentionally not preserved.
pub fn resize_bilinear(
    data: &[u8],
    width: usize,
    height: usize,
    target_w: usize,
    target_h: usize,
) -> Vec<u8> {
    debug_assert_eq!(data.len(), width * height);
    debug_assert!(width > 0 && height > 0 && target_w > 0 && target_h > 0);

    let mut out = vec![0u8; target_w * target_h];

    for y in 0..target_h {
        for x in 0..target_w {
            let src_x = x as f32 * (width as f32 - 1.0) / (target_w as f32 - 1.0).max(1.0);
            let src_y = y as f32 * (height as f32 - 1.0) / (target_h as f32 - 1.0).max(1.0);

            let x0 = (src_x.floor() as usize).min(width - 1);
            let x1 = (x0 + 1).min(width - 1);
            let y0 = (src_y.floor() as usize).min(height - 1);
            let y1 = (y0 + 1).min(height - 1);

            let fx = src_x - x0 as f32;
            let fy = src_y - y0 as f32;

            let v00 = data[y0 * width + x0] as f32;
            let v10 = data[y0 * width + x1] as f32;
            let v01 = data[y1 * width + x0] as f32;
            let v11 = data[y1 * width + x1] as f32;

            let val = v00 * (1.0 - fx) * (1.0 - fy)
                + v10 * fx * (1.0 - fy)
                + v01 * (1.0 - fx) * fy
                + v11 * fx * fy;
            out[y * target_w + x] = val.round().clamp(0.0, 255.0) as u8;
        }
    }

    out
}

/// In-place histogram equalization of a single-channel buffer.
///
/// Classic 256-bin CDF remap: `lut(v) = round((cdf(v) - cdf_min) * 255 /
/// (total - cdf_min))`, where `cdf_min` is the count of the darkest occupied
/// bin. Images occupying a single intensity level pass through unchanged.
pub fn equalize_hist(data: &mut [u8]) {
    if data.is_empty() {
        return;
    }

    let mut counts = [0usize; 256];
    for &v in data.iter() {
        counts[v as usize] += 1;
    }

    let first = counts
        .iter()
        .position(|&c| c > 0)
        .expect("non-empty buffer has an occupied bin");
    let total = data.len();
    let cdf_min = counts[first];
    if cdf_min == total {
        return;
    }

    let scale = 255.0 / (total - cdf_min) as f64;
    let mut lut = [0u8; 256];
    let mut cum = 0usize;
    for (i, &c) in counts.iter().enumerate() {
        cum += c;
        if i > first {
            lut[i] = ((cum - cdf_min) as f64 * scale).round() as u8;
        }
    }

    for v in data.iter_mut() {
        *v = lut[*v as usize];
    }
}
