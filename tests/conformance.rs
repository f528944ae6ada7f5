use neonjpeg::idct::{idct, Block, BLOCK_SIZE};
use neonjpeg::reference::measure_accuracy;

/// Standard JPEG luminance quantization table, natural order.
const LUMA_Q: [i32; 64] = [
    16, 11, 10, 16, 24, 40, 51, 61,
    12, 12, 14, 19, 26, 58, 60, 55,
    14, 13, 16, 24, 40, 57, 69, 56,
    14, 17, 22, 29, 51, 87, 80, 62,
    18, 22, 37, 56, 68, 109, 103, 77,
    24, 35, 55, 64, 81, 104, 113, 92,
    49, 64, 78, 87, 103, 121, 120, 101,
    72, 92, 95, 98, 112, 100, 103, 99,
];

/// Quantized coefficients of the well-known worked JPEG example block.
const EXAMPLE_QUANTIZED: [i32; 64] = [
    -26, -3, -6, 2, 2, -1, 0, 0,
    0, -2, -4, 1, 1, 0, 0, 0,
    -3, 1, 5, -1, -1, 0, 0, 0,
    -3, 1, 2, -1, 0, 0, 0, 0,
    1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
];

#[test]
fn worked_example_block() {
    let mut block: Block = std::array::from_fn(|i| EXAMPLE_QUANTIZED[i] * LUMA_Q[i]);
    assert_eq!(&block[..8], &[-416, -33, -60, 32, 48, -40, 0, 0]);

    idct(&mut block);

    #[rustfmt::skip]
    let expected: Block = [
        -66, -63, -71, -68, -56, -65, -68, -46,
        -71, -73, -72, -46, -20, -41, -66, -57,
        -70, -78, -68, -17, 20, -14, -61, -63,
        -63, -73, -62, -8, 27, -14, -60, -58,
        -58, -65, -61, -27, -6, -40, -68, -50,
        -57, -57, -64, -58, -48, -66, -72, -47,
        -53, -46, -61, -74, -65, -63, -62, -45,
        -47, -34, -53, -74, -60, -47, -47, -41,
    ];
    assert_eq!(block, expected);

    // Level-shifted first row of the decoded example.
    let shifted: Vec<i32> = block[..8].iter().map(|v| v + 128).collect();
    assert_eq!(shifted, vec![62, 65, 57, 60, 72, 63, 60, 82]);
}

#[test]
fn ramp_block() {
    let mut block: Block = std::array::from_fn(|i| i as i32);
    idct(&mut block);

    #[rustfmt::skip]
    let expected: Block = [
        173, -63, 42, -19, 22, -5, 12, 4,
        -176, 52, -39, 15, -21, 3, -12, -5,
        71, -23, 16, -7, 9, -1, 5, 2,
        -60, 17, -13, 5, -7, 1, -4, -2,
        33, -11, 8, -3, 4, -1, 2, 1,
        -26, 7, -6, 2, -3, 0, -2, -1,
        11, -4, 3, -1, 1, 0, 1, 0,
        -6, 1, -1, 0, -1, 0, 0, 0,
    ];
    assert_eq!(block, expected);
}

fn sparse(entries: &[(usize, i32)]) -> Block {
    let mut b = [0i32; BLOCK_SIZE];
    for &(i, v) in entries {
        b[i] = v;
    }
    b
}

#[test]
fn high_frequency_only_block() {
    let mut block = sparse(&[(63, -1000), (54, 300), (45, -75)]);
    idct(&mut block);

    #[rustfmt::skip]
    let expected: Block = [
        -4, 11, -16, 28, -50, 69, -64, 26,
        11, -31, 55, -94, 147, -183, 159, -64,
        -16, 55, -110, 174, -227, 238, -183, 69,
        28, -94, 174, -243, 264, -227, 147, -50,
        -50, 147, -227, 264, -243, 174, -94, 28,
        69, -183, 238, -227, 174, -110, 55, -16,
        -64, 159, -183, 147, -94, 55, -31, 11,
        26, -64, 69, -50, 28, -16, 11, -4,
    ];
    assert_eq!(block, expected);
}

#[test]
fn corner_and_midband_block() {
    let mut block = sparse(&[(7, 120), (56, -120), (36, 64)]);
    idct(&mut block);

    #[rustfmt::skip]
    let expected: Block = [
        8, -24, 6, -17, 25, -30, 0, 0,
        8, 8, 37, -17, 25, 2, 32, 0,
        -21, -21, 8, -46, -5, -27, 2, -30,
        33, 1, 30, 8, 50, -5, 25, 25,
        -9, -41, -11, -34, 8, -46, -17, -17,
        14, 14, 43, -11, 30, 8, 37, 5,
        -16, -16, 14, -41, 1, -21, 8, -24,
        16, -16, 14, -9, 33, -22, 8, 8,
    ];
    assert_eq!(block, expected);
}

#[test]
fn diagonal_mixed_sign_block() {
    let mut block = sparse(&[(0, -512), (9, 45), (18, -33), (27, 21), (60, -7), (15, 9)]);
    idct(&mut block);

    #[rustfmt::skip]
    let expected: Block = [
        -56, -60, -57, -60, -55, -65, -74, -86,
        -58, -59, -56, -60, -61, -71, -73, -75,
        -60, -56, -55, -65, -71, -74, -67, -64,
        -56, -60, -64, -68, -71, -73, -64, -56,
        -58, -62, -70, -74, -71, -61, -58, -58,
        -62, -69, -76, -69, -63, -57, -58, -58,
        -76, -71, -70, -62, -61, -54, -58, -59,
        -86, -74, -65, -54, -59, -58, -60, -56,
    ];
    assert_eq!(block, expected);
}

#[test]
fn not_additive() {
    // Rounding breaks superposition; golden vectors are the only oracle.
    let a: Block = std::array::from_fn(|i| if i == 1 { 3 } else { 0 });
    let b: Block = std::array::from_fn(|i| if i == 9 { 3 } else { 0 });
    let sum: Block = std::array::from_fn(|i| a[i] + b[i]);

    let (mut ta, mut tb, mut ts) = (a, b, sum);
    idct(&mut ta);
    idct(&mut tb);
    idct(&mut ts);

    let added: Block = std::array::from_fn(|i| ta[i] + tb[i]);
    assert_ne!(added, ts);
}

/// Small LCG so the test vectors are reproducible without extra crates.
struct Lcg(u32);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1103515245).wrapping_add(12345) & 0x7fff_ffff;
        self.0
    }
}

#[test]
fn random_blocks_within_one_of_reference() {
    let mut rng = Lcg(0x1234_5678);
    let blocks: Vec<Block> = (0..64)
        .map(|_| std::array::from_fn(|_| ((rng.next() >> 8) % 512) as i32 - 256))
        .collect();

    let report = measure_accuracy(&blocks);
    assert_eq!(report.blocks, 64);
    assert_eq!(report.samples, 64 * BLOCK_SIZE);
    assert!(report.peak_error <= 1, "peak error {}", report.peak_error);
    assert!(report.mean_square_error < 0.06, "mse {}", report.mean_square_error);
    assert!(report.mean_error.abs() < 0.015, "mean {}", report.mean_error);
}
