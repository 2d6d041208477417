//! Command line frontend for the huffzip codec.
//!
//! Owns the file handling and the size reporting; the codec itself only
//! ever sees in-memory buffers.

#[path = "huffzip/progress.rs"]
mod progress;

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::progress::{fmt_size, ProgressMonitor};

#[derive(Parser)]
#[command(name = "huffzip", version, about = "Compress and decompress files with Huffman coding")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a file into a huffzip frame
    Compress {
        input: PathBuf,
        output: PathBuf,
    },
    /// Restore the original file from a huffzip frame
    Decompress {
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();

    match Cli::parse().command {
        Command::Compress { input, output } => {
            let data = read_input(&input)?;
            let compressed = huffzip::compress_to_vec(&data);
            write_output(&output, &compressed)?;

            // Ratio is computed from the observed byte lengths alone
            let ratio = if data.is_empty() {
                0.0
            } else {
                (1.0 - compressed.len() as f64 / data.len() as f64) * 100.0
            };
            info!(
                "compressed {} into {} ({ratio:.1}% reduction)",
                fmt_size(data.len() as f64),
                fmt_size(compressed.len() as f64),
            );
        }
        Command::Decompress { input, output } => {
            let data = read_input(&input)?;
            let decompressed = huffzip::decompress_to_vec(&data)
                .wrap_err_with(|| format!("{} is not a valid huffzip frame", input.display()))?;
            write_output(&output, &decompressed)?;

            info!(
                "restored {} from {}",
                fmt_size(decompressed.len() as f64),
                fmt_size(data.len() as f64),
            );
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let file =
        File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    let size = file.metadata()?.len() as usize;

    let mut monitor = ProgressMonitor::new(file, size);
    let mut data = Vec::with_capacity(size);
    monitor
        .read_to_end(&mut data)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Ok(data)
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).wrap_err_with(|| format!("failed to create {}", path.display()))?;
    file.write_all(data)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
