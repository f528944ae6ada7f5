pub mod batch;
pub mod block;
pub mod error;
pub mod idct;
pub mod reference;

pub use batch::{default_workers, idct_blocks};
pub use block::{transform_file, BlockFile, CoefficientBlock};
pub use error::BlockError;
pub use idct::{
    check_block, check_coefficient, idct, idct_dc_only, idct_slice, Block, BLOCK_SIZE, MAX_COEFFICIENT, MIN_COEFFICIENT,
};
pub use reference::{measure_accuracy, reference_idct, AccuracyReport};
