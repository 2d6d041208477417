//! Interface for encoding a whole input buffer into one Huffman frame.

use crate::encoding::bit_writer::BitWriter;
use crate::frame::{self, FrameHeader};
use crate::frequency::FrequencyTable;
use crate::huffman::{CodeTable, HuffmanTree};

/// Compress `data` into a single self-describing Huffman frame.
///
/// One pass counts the byte frequencies, the code tree is built from the
/// counts, and a second pass maps every input byte through the code table
/// into the packed payload. Empty input produces a minimal frame that
/// decodes back to empty output.
///
/// ```
/// let frame = huffzip::compress_to_vec(b"aaab");
/// assert_eq!(huffzip::decompress_to_vec(&frame).unwrap(), b"aaab");
/// ```
pub fn compress_to_vec(data: &[u8]) -> Vec<u8> {
    let table = FrequencyTable::count_bytes(data);

    let mut writer = BitWriter::new();
    if let Some(tree) = HuffmanTree::from_frequencies(&table) {
        let codes = CodeTable::from_tree(&tree);
        for &byte in data {
            let (bits, num_bits) = codes.code_of(byte);
            writer.write_bits(bits, num_bits);
        }
    }
    let (payload, padding_bits) = writer.dump();

    let header = FrameHeader {
        padding_bits,
        payload_len: payload.len() as u64,
        table,
    };
    let mut output =
        Vec::with_capacity(frame::header_len(header.table.distinct_symbols()) + payload.len());
    header.serialize(&mut output);
    output.extend_from_slice(&payload);
    output
}
