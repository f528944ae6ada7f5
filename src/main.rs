use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use neonjpeg::batch::default_workers;
use neonjpeg::block::{transform_file, BlockFile};
use neonjpeg::idct::{check_coefficient, idct_dc_only};
use neonjpeg::reference::measure_accuracy;

#[derive(Parser)]
#[command(name = "neonjpeg")]
#[command(about = "Run the fixed-point 8x8 inverse DCT over dequantized coefficient blocks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform every block of a JSON block file
    Transform {
        /// Input block file (JSON)
        input: PathBuf,

        /// Output block file
        #[arg(long)]
        out: PathBuf,

        /// Worker threads (default: available parallelism)
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Compare the fixed-point transform with the f64 reference
    Check {
        /// Input block file (JSON)
        input: PathBuf,

        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the uniform sample produced by DC-only blocks
    Dc {
        /// Dequantized DC coefficients
        #[arg(allow_negative_numbers = true, required = true)]
        values: Vec<i32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Transform { input, out, workers } => {
            let file = BlockFile::load(&input)?;
            let workers = workers.unwrap_or_else(default_workers);
            let result = transform_file(&file, workers)?;
            result.save(&out)?;
            eprintln!("transformed {} block(s) -> {:?}", result.blocks.len(), out);
        }
        Command::Check { input, out } => {
            let file = BlockFile::load(&input)?;
            let report = measure_accuracy(&file.to_blocks()?);
            let s = serde_json::to_string_pretty(&report).context("json serialize")?;
            match out {
                Some(path) => {
                    fs::write(&path, s).with_context(|| format!("write: {path:?}"))?;
                    eprintln!("peak error {} over {} block(s)", report.peak_error, report.blocks);
                }
                None => println!("{s}"),
            }
        }
        Command::Dc { values } => {
            for (i, dc) in values.into_iter().enumerate() {
                let dc = check_coefficient(0, dc).with_context(|| format!("dc value {i}"))?;
                println!("{dc}\t{}", idct_dc_only(dc));
            }
        }
    }

    Ok(())
}
