use std::thread;

use crate::idct::{idct, Block};

/// Worker count used when the caller does not pick one.
pub fn default_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Transform every block in place, spreading the slice over `workers` threads.
///
/// Blocks are independent, so each thread gets a disjoint run of the slice and
/// no synchronization is needed. The result is identical to calling [`idct`]
/// on each block in order.
pub fn idct_blocks(blocks: &mut [Block], workers: usize) {
    if workers <= 1 || blocks.len() < workers {
        blocks.iter_mut().for_each(idct);
        return;
    }

    let chunk = blocks.len().div_ceil(workers);
    log::debug!("idct: {} blocks over {} workers ({} per chunk)", blocks.len(), workers, chunk);
    thread::scope(|s| {
        for part in blocks.chunks_mut(chunk) {
            s.spawn(move || part.iter_mut().for_each(idct));
        }
    });
}
