use crate::error::BlockError;

/// Number of coefficients in an 8x8 block.
pub const BLOCK_SIZE: usize = 64;

/// An 8x8 grid of coefficients or samples in natural (row-major) order.
pub type Block = [i32; BLOCK_SIZE];

/// Lower bound of the dequantized coefficient range the transform is rated for.
pub const MIN_COEFFICIENT: i32 = -2048;
/// Upper bound of the dequantized coefficient range the transform is rated for.
pub const MAX_COEFFICIENT: i32 = 2047;

pub const W1: i64 = 2841; // 2048*sqrt(2)*cos(1*pi/16)
pub const W2: i64 = 2676; // 2048*sqrt(2)*cos(2*pi/16)
pub const W3: i64 = 2408; // 2048*sqrt(2)*cos(3*pi/16)
pub const W5: i64 = 1609; // 2048*sqrt(2)*cos(5*pi/16)
pub const W6: i64 = 1108; // 2048*sqrt(2)*cos(6*pi/16)
pub const W7: i64 = 565; // 2048*sqrt(2)*cos(7*pi/16)

pub const W1PW7: i64 = W1 + W7;
pub const W1MW7: i64 = W1 - W7;
pub const W2PW6: i64 = W2 + W6;
pub const W2MW6: i64 = W2 - W6;
pub const W3PW5: i64 = W3 + W5;
pub const W3MW5: i64 = W3 - W5;

pub const R2: i64 = 181; // 256/sqrt(2)

/// 2-D inverse DCT of a dequantized block, in place.
///
/// Fixed-point implementation of Wang's fast algorithm ("Fast algorithms for
/// the discrete W transform and for the discrete Fourier transform", IEEE
/// Trans. on ASSP, Vol. ASSP-32, pp. 803-816, Aug. 1984), matching the MPEG
/// Software Simulation Group reference decoder bit for bit. The number of
/// fractional bits varies over the intermediate stages.
///
/// No level shift or clamping is applied; the output holds signed residuals.
/// Intermediates are carried in `i64`, so no input in
/// `MIN_COEFFICIENT..=MAX_COEFFICIENT` can overflow. Inputs from outside the
/// process should go through [`check_block`] first.
pub fn idct(block: &mut Block) {
    for row in block.chunks_exact_mut(8) {
        idct_row(row);
    }

    // Every column read spans all eight rows, so the row pass must be complete.
    for x in 0..8 {
        idct_col(block, x);
    }
}

/// Checked entry point for callers holding an unsized buffer.
///
/// The buffer is left untouched when its length is not [`BLOCK_SIZE`].
pub fn idct_slice(coefficients: &mut [i32]) -> Result<(), BlockError> {
    let len = coefficients.len();
    let block: &mut Block = coefficients
        .try_into()
        .map_err(|_| BlockError::InvalidLength { len })?;
    idct(block);
    Ok(())
}

/// The uniform sample [`idct`] produces for a block whose only nonzero entry
/// is the DC coefficient.
///
/// Row 0 becomes `dc << 3`; the column pass then reduces
/// `((dc << 11) + 8192) >> 14`, i.e. `dc / 8` rounded half up.
#[inline]
pub fn idct_dc_only(dc: i32) -> i32 {
    ((i64::from(dc) + 4) >> 3) as i32
}

/// Reject a coefficient outside the range the transform is rated for.
pub fn check_coefficient(index: usize, value: i32) -> Result<i32, BlockError> {
    if (MIN_COEFFICIENT..=MAX_COEFFICIENT).contains(&value) {
        Ok(value)
    } else {
        Err(BlockError::OutOfRange { index, value })
    }
}

/// Check every coefficient of `block` against the rated range.
pub fn check_block(block: &Block) -> Result<(), BlockError> {
    for (i, &v) in block.iter().enumerate() {
        check_coefficient(i, v)?;
    }
    Ok(())
}

#[inline]
fn narrow(v: i64) -> i32 {
    debug_assert!(i32::try_from(v).is_ok(), "idct intermediate {v} does not fit in i32");
    v as i32
}

/// Horizontal 1-D IDCT of one row.
fn idct_row(row: &mut [i32]) {
    // If all the AC components are zero, the IDCT is trivial.
    if row[1..8].iter().all(|&c| c == 0) {
        let dc = narrow(i64::from(row[0]) << 3);
        row.fill(dc);
        return;
    }
    idct_row_full(row);
}

fn idct_row_full(row: &mut [i32]) {
    // Prescale.
    let mut x0 = (i64::from(row[0]) << 11) + 128;
    let mut x1 = i64::from(row[4]) << 11;
    let mut x2 = i64::from(row[6]);
    let mut x3 = i64::from(row[2]);
    let mut x4 = i64::from(row[1]);
    let mut x5 = i64::from(row[7]);
    let mut x6 = i64::from(row[5]);
    let mut x7 = i64::from(row[3]);

    // Stage 1.
    let mut x8 = W7 * (x4 + x5);
    x4 = x8 + W1MW7 * x4;
    x5 = x8 - W1PW7 * x5;
    x8 = W3 * (x6 + x7);
    x6 = x8 - W3MW5 * x6;
    x7 = x8 - W3PW5 * x7;

    // Stage 2.
    x8 = x0 + x1;
    x0 -= x1;
    x1 = W6 * (x3 + x2);
    x2 = x1 - W2PW6 * x2;
    x3 = x1 + W2MW6 * x3;
    x1 = x4 + x6;
    x4 -= x6;
    x6 = x5 + x7;
    x5 -= x7;

    // Stage 3.
    x7 = x8 + x3;
    x8 -= x3;
    x3 = x0 + x2;
    x0 -= x2;
    x2 = (R2 * (x4 + x5) + 128) >> 8;
    x4 = (R2 * (x4 - x5) + 128) >> 8;

    // Stage 4.
    row[0] = narrow((x7 + x1) >> 8);
    row[1] = narrow((x3 + x2) >> 8);
    row[2] = narrow((x0 + x4) >> 8);
    row[3] = narrow((x8 + x6) >> 8);
    row[4] = narrow((x8 - x6) >> 8);
    row[5] = narrow((x0 - x4) >> 8);
    row[6] = narrow((x3 - x2) >> 8);
    row[7] = narrow((x7 - x1) >> 8);
}

/// Vertical 1-D IDCT of column `x`, over the output of the row pass.
///
/// There is no all-AC-zero shortcut here: after the row pass a column is
/// rarely empty, and the reference decoder does not check either.
fn idct_col(block: &mut Block, x: usize) {
    // Prescale.
    let mut y0 = (i64::from(block[x]) << 8) + 8192;
    let mut y1 = i64::from(block[8 * 4 + x]) << 8;
    let mut y2 = i64::from(block[8 * 6 + x]);
    let mut y3 = i64::from(block[8 * 2 + x]);
    let mut y4 = i64::from(block[8 + x]);
    let mut y5 = i64::from(block[8 * 7 + x]);
    let mut y6 = i64::from(block[8 * 5 + x]);
    let mut y7 = i64::from(block[8 * 3 + x]);

    // Stage 1.
    let mut y8 = W7 * (y4 + y5) + 4;
    y4 = (y8 + W1MW7 * y4) >> 3;
    y5 = (y8 - W1PW7 * y5) >> 3;
    y8 = W3 * (y6 + y7) + 4;
    y6 = (y8 - W3MW5 * y6) >> 3;
    y7 = (y8 - W3PW5 * y7) >> 3;

    // Stage 2.
    y8 = y0 + y1;
    y0 -= y1;
    y1 = W6 * (y3 + y2) + 4;
    y2 = (y1 - W2PW6 * y2) >> 3;
    y3 = (y1 + W2MW6 * y3) >> 3;
    y1 = y4 + y6;
    y4 -= y6;
    y6 = y5 + y7;
    y5 -= y7;

    // Stage 3.
    y7 = y8 + y3;
    y8 -= y3;
    y3 = y0 + y2;
    y0 -= y2;
    y2 = (R2 * (y4 + y5) + 128) >> 8;
    y4 = (R2 * (y4 - y5) + 128) >> 8;

    // Stage 4.
    block[x] = narrow((y7 + y1) >> 14);
    block[8 + x] = narrow((y3 + y2) >> 14);
    block[8 * 2 + x] = narrow((y0 + y4) >> 14);
    block[8 * 3 + x] = narrow((y8 + y6) >> 14);
    block[8 * 4 + x] = narrow((y8 - y6) >> 14);
    block[8 * 5 + x] = narrow((y0 - y4) >> 14);
    block[8 * 6 + x] = narrow((y3 - y2) >> 14);
    block[8 * 7 + x] = narrow((y7 - y1) >> 14);
}
