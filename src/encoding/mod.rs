//! Modules used for compressing data into Huffman frames.

pub(crate) mod bit_writer;
mod frame_encoder;

pub use frame_encoder::compress_to_vec;
