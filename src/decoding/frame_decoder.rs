//! Interface for decoding a Huffman frame back into the original bytes.

use crate::decoding::bit_reader::{BitReader, GetBitsError};
use crate::frame::{FrameHeader, FrameHeaderError};
use crate::huffman::{HuffmanNode, HuffmanTree};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FrameDecoderError {
    #[error(transparent)]
    FrameHeaderError(#[from] FrameHeaderError),
    #[error("Payload is truncated. Is: {got} bytes, Header declares: {need} bytes")]
    TruncatedPayload { got: usize, need: u64 },
    #[error("Unexpected {got} bytes after the declared payload")]
    TrailingBytes { got: usize },
    #[error("Bitstream holds {bits_left} bits, too few for the declared {symbols} symbols")]
    BitstreamTooShort { symbols: u64, bits_left: usize },
    #[error(transparent)]
    GetBitsError(#[from] GetBitsError),
    #[error("Bitstream has {got} bits left over after all {symbols} declared symbols were decoded")]
    LeftoverBits { got: usize, symbols: u64 },
    #[error("Run of a single distinct symbol contains a set bit")]
    CorruptSymbolRun,
}

/// Decompress a frame produced by [`crate::compress_to_vec`], restoring the
/// original bytes exactly.
///
/// The code tree is rebuilt from the frequency table in the header with the
/// same deterministic merge order the encoder used, then the payload is
/// walked bit by bit from the root, emitting a byte at each leaf, until the
/// frequency sum is reached. Structural problems fail with a specific error
/// before any output is returned; there is no best-effort decoding.
pub fn decompress_to_vec(raw: &[u8]) -> Result<Vec<u8>, FrameDecoderError> {
    let (header, payload_start) = FrameHeader::parse(raw)?;

    let payload = &raw[payload_start..];
    if (payload.len() as u64) < header.payload_len {
        return Err(FrameDecoderError::TruncatedPayload {
            got: payload.len(),
            need: header.payload_len,
        });
    }
    if (payload.len() as u64) > header.payload_len {
        return Err(FrameDecoderError::TrailingBytes {
            got: payload.len() - header.payload_len as usize,
        });
    }

    let Some(total) = header.table.total() else {
        return Err(FrameHeaderError::FrequencySumOverflow.into());
    };
    let Some(tree) = HuffmanTree::from_frequencies(&header.table) else {
        return Ok(Vec::new());
    };

    let mut reader = BitReader::new(payload, header.padding_bits);
    // Every symbol consumes at least one bit, so this also bounds the
    // output allocation by the payload size
    if total > reader.bits_left() as u64 {
        return Err(FrameDecoderError::BitstreamTooShort {
            symbols: total,
            bits_left: reader.bits_left(),
        });
    }

    let mut decoded = Vec::with_capacity(total as usize);
    for _ in 0..total {
        let symbol = match tree.root() {
            // A single-leaf tree carries no information in its bits; the run
            // length comes from the stored count. The run must still be the
            // zero bits the encoder wrote.
            HuffmanNode::Leaf { symbol, .. } => {
                if reader.get_bit()? {
                    return Err(FrameDecoderError::CorruptSymbolRun);
                }
                *symbol
            }
            HuffmanNode::Internal { .. } => {
                let mut node = tree.root();
                loop {
                    match node {
                        HuffmanNode::Internal { left, right, .. } => {
                            node = if reader.get_bit()? { right } else { left };
                        }
                        HuffmanNode::Leaf { symbol, .. } => break *symbol,
                    }
                }
            }
        };
        decoded.push(symbol);
    }

    if reader.bits_left() > 0 {
        return Err(FrameDecoderError::LeftoverBits {
            got: reader.bits_left(),
            symbols: total,
        });
    }

    Ok(decoded)
}
