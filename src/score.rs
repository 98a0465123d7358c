//! The robustness score: how much of a codeword survives a downscale,
//! threshold, and upscale round trip.

use crate::resample::{bilinear_resize, nearest_resize};

const IMAGE_SIDE: usize = 256;
const SCORE_SIDE: usize = 128;

/// Score `bits` (a 256×256 raster of `0.0`/`1.0` values, row-major) by how
/// much of it survives: bilinear downscale to 128×128, threshold at `> 0.5`,
/// nearest-neighbor upscale back to 256×256, compared against the original.
///
/// Returns the fraction of pixels that match, in `[0, 1]`. Higher is better.
pub(crate) fn robustness_score(bits: &[f32]) -> f64 {
    assert_eq!(bits.len(), IMAGE_SIDE * IMAGE_SIDE);

    let down = bilinear_resize(bits, IMAGE_SIDE, IMAGE_SIDE, SCORE_SIDE, SCORE_SIDE);
    let thresholded: Vec<f32> = down.iter().map(|&v| if v > 0.5 { 1.0 } else { 0.0 }).collect();
    let up = nearest_resize(&thresholded, SCORE_SIDE, SCORE_SIDE, IMAGE_SIDE, IMAGE_SIDE);

    let equal = bits
        .iter()
        .zip(up.iter())
        .filter(|(&original, &round_tripped)| original as i64 == round_tripped as i64)
        .count();

    equal as f64 / (IMAGE_SIDE * IMAGE_SIDE) as f64
}
