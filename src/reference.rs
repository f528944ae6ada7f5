use std::f64::consts::{FRAC_1_SQRT_2, PI};

use serde::{Deserialize, Serialize};

use crate::idct::{idct, Block, BLOCK_SIZE};

/// A correctness-first 8x8 IDCT in `f64`.
///
/// Direct evaluation of the separable 2-D sum with the JPEG `1/4` factor, so a
/// DC of `k` yields `k / 8` everywhere, the same scale as [`idct`]. Results are
/// rounded half away from zero and not clamped. Only used to measure the
/// fixed-point transform.
pub fn reference_idct(coeff: &Block) -> Block {
    let mut out = [0i32; BLOCK_SIZE];
    for y in 0..8 {
        for x in 0..8 {
            let mut sum = 0.0f64;
            for v in 0..8 {
                for u in 0..8 {
                    let cu = if u == 0 { FRAC_1_SQRT_2 } else { 1.0 };
                    let cv = if v == 0 { FRAC_1_SQRT_2 } else { 1.0 };
                    let c = coeff[v * 8 + u] as f64;
                    let a = ((2 * x + 1) as f64 * u as f64 * PI) / 16.0;
                    let b = ((2 * y + 1) as f64 * v as f64 * PI) / 16.0;
                    sum += cu * cv * c * a.cos() * b.cos();
                }
            }
            out[y * 8 + x] = (sum / 4.0).round() as i32;
        }
    }
    out
}

/// Error statistics of the fixed-point transform against [`reference_idct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub blocks: usize,
    pub samples: usize,
    /// Largest absolute per-sample difference.
    pub peak_error: u32,
    pub mean_square_error: f64,
    /// Mean signed difference (fixed-point minus reference).
    pub mean_error: f64,
    /// Index of the first block that reached `peak_error`, when it is nonzero.
    pub worst_block: Option<usize>,
}

pub fn measure_accuracy(blocks: &[Block]) -> AccuracyReport {
    let mut peak_error = 0u32;
    let mut worst_block = None;
    let mut sum_sq = 0i64;
    let mut sum = 0i64;

    for (i, coeff) in blocks.iter().enumerate() {
        let expected = reference_idct(coeff);
        let mut got = *coeff;
        idct(&mut got);

        for (g, e) in got.iter().zip(expected.iter()) {
            let d = i64::from(*g) - i64::from(*e);
            sum += d;
            sum_sq += d * d;
            let ad = d.unsigned_abs() as u32;
            if ad > peak_error {
                peak_error = ad;
                worst_block = Some(i);
            }
        }
    }

    let samples = blocks.len() * BLOCK_SIZE;
    let (mean_square_error, mean_error) = if samples == 0 {
        (0.0, 0.0)
    } else {
        (sum_sq as f64 / samples as f64, sum as f64 / samples as f64)
    };

    AccuracyReport {
        blocks: blocks.len(),
        samples,
        peak_error,
        mean_square_error,
        mean_error,
        worst_block,
    }
}
