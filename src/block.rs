use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::batch::idct_blocks;
use crate::error::BlockError;
use crate::idct::{check_block, Block, BLOCK_SIZE};

/// One coefficient (or sample) block as stored on disk.
// Coefficients are a Vec<i32> rather than [i32; 64]: serde does not implement
// Serialize/Deserialize for fixed-size arrays longer than 32.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoefficientBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// 64 entries, natural row-major order.
    pub coefficients: Vec<i32>,
}

impl CoefficientBlock {
    pub fn from_block(label: Option<String>, block: &Block) -> Self {
        Self { label, coefficients: block.to_vec() }
    }

    /// Fixed-size copy of the coefficients, checked for length and range.
    pub fn to_block(&self) -> Result<Block, BlockError> {
        let block: Block = self
            .coefficients
            .as_slice()
            .try_into()
            .map_err(|_| BlockError::InvalidLength { len: self.coefficients.len() })?;
        check_block(&block)?;
        Ok(block)
    }
}

/// A JSON document holding a list of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFile {
    pub blocks: Vec<CoefficientBlock>,
}

impl BlockFile {
    /// Read a block file and check that every block holds 64 entries.
    ///
    /// Values are not range-checked here: the same format carries transformed
    /// samples, which may exceed the coefficient range.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("read: {path:?}"))?;
        let file: BlockFile =
            serde_json::from_str(&text).with_context(|| format!("parse block file: {path:?}"))?;
        file.check_lengths().with_context(|| format!("validate block file: {path:?}"))?;
        log::info!("loaded {} block(s) from {:?}", file.blocks.len(), path);
        Ok(file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let s = serde_json::to_string_pretty(self).context("json serialize")?;
        fs::write(path, s).with_context(|| format!("write: {path:?}"))?;
        Ok(())
    }

    fn check_lengths(&self) -> Result<()> {
        for (i, b) in self.blocks.iter().enumerate() {
            let len = b.coefficients.len();
            if len != BLOCK_SIZE {
                return Err(BlockError::InvalidLength { len }).with_context(|| format!("block {i}"));
            }
        }
        Ok(())
    }

    /// Fixed-size copies of every block, failing on the first malformed or
    /// out-of-range one.
    pub fn to_blocks(&self) -> Result<Vec<Block>> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, b)| b.to_block().with_context(|| format!("block {i}")))
            .collect()
    }
}

/// Run the inverse DCT over every block of `input`, keeping order and labels.
pub fn transform_file(input: &BlockFile, workers: usize) -> Result<BlockFile> {
    let mut blocks = input.to_blocks()?;
    idct_blocks(&mut blocks, workers);

    let blocks = input
        .blocks
        .iter()
        .zip(&blocks)
        .map(|(src, out)| CoefficientBlock::from_block(src.label.clone(), out))
        .collect();
    Ok(BlockFile { blocks })
}
