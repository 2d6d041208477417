//! A lossless compressor/decompressor built on Huffman coding.
//!
//! The input is scanned once to build a frequency table for the byte values
//! actually present, a frequency-optimal prefix code is derived from it, and
//! the coded bitstream is packed into a self-describing frame that carries
//! the table, so decompression needs no out-of-band information.
//!
//! ```
//! let data = b"so much data, such compression";
//! let compressed = huffzip::compress_to_vec(data);
//! let restored = huffzip::decompress_to_vec(&compressed).unwrap();
//! assert_eq!(restored, data);
//! ```
//!
//! The codec is a pure in-memory transformation. File handling lives in the
//! `huffzip` binary behind the `cli` feature.
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

pub mod decoding;
pub mod encoding;
pub mod frame;
pub mod frequency;
pub mod huffman;
#[cfg(test)]
mod tests;

pub use decoding::{decompress_to_vec, FrameDecoderError};
pub use encoding::compress_to_vec;
