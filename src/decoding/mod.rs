//! Modules used for decoding Huffman frames back into the original bytes.

pub(crate) mod bit_reader;
mod frame_decoder;

pub use frame_decoder::{decompress_to_vec, FrameDecoderError};
