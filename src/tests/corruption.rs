//! Decoding a damaged frame must fail with a specific error, never return
//! fabricated output.

use crate::decoding::FrameDecoderError;
use crate::frame::FrameHeaderError;
use crate::{compress_to_vec, decompress_to_vec};

// Offsets into the "aaab" frame: magic at 0, symbol count at 4, entries at
// 6 and 15, padding bits at 24, payload length at 25, payload at 33.
const AAAB_PADDING_IDX: usize = 24;
const AAAB_PAYLOAD_LEN_IDX: usize = 25;

#[test]
fn rejects_empty_container() {
    assert!(matches!(
        decompress_to_vec(&[]),
        Err(FrameDecoderError::FrameHeaderError(
            FrameHeaderError::NotEnoughBytes { .. }
        ))
    ));
}

#[test]
fn rejects_foreign_magic() {
    let mut frame = compress_to_vec(b"aaab");
    frame[0] = b'P';
    assert!(matches!(
        decompress_to_vec(&frame),
        Err(FrameDecoderError::FrameHeaderError(
            FrameHeaderError::BadMagicNum { .. }
        ))
    ));
}

#[test]
fn rejects_truncated_header() {
    let frame = compress_to_vec(b"aaab");
    assert!(matches!(
        decompress_to_vec(&frame[..10]),
        Err(FrameDecoderError::FrameHeaderError(
            FrameHeaderError::NotEnoughBytes { .. }
        ))
    ));
}

#[test]
fn rejects_truncated_payload() {
    let mut frame = compress_to_vec(b"aaab");
    frame.pop();
    assert_eq!(
        decompress_to_vec(&frame),
        Err(FrameDecoderError::TruncatedPayload { got: 0, need: 1 })
    );
}

#[test]
fn rejects_payload_truncated_by_one_byte() {
    let data = b"a longer sample so the payload spans several bytes";
    let mut frame = compress_to_vec(data);
    frame.pop();
    assert!(matches!(
        decompress_to_vec(&frame),
        Err(FrameDecoderError::TruncatedPayload { .. })
    ));
}

#[test]
fn rejects_trailing_garbage() {
    let mut frame = compress_to_vec(b"aaab");
    frame.push(0x00);
    assert_eq!(
        decompress_to_vec(&frame),
        Err(FrameDecoderError::TrailingBytes { got: 1 })
    );
}

#[test]
fn rejects_leftover_bits() {
    // grow the payload and its declared length by one byte: the tree walk
    // finishes after the four real symbols with eight undecoded bits left
    let mut frame = compress_to_vec(b"aaab");
    frame[AAAB_PAYLOAD_LEN_IDX] = 2;
    frame.push(0x00);
    assert_eq!(
        decompress_to_vec(&frame),
        Err(FrameDecoderError::LeftoverBits {
            got: 8,
            symbols: 4
        })
    );
}

#[test]
fn rejects_counts_larger_than_the_bitstream() {
    // raise the count of 'a' from 3 to 200: four padded payload bits cannot
    // hold 201 symbols
    let mut frame = compress_to_vec(b"aaab");
    frame[7] = 200;
    assert_eq!(
        decompress_to_vec(&frame),
        Err(FrameDecoderError::BitstreamTooShort {
            symbols: 201,
            bits_left: 4
        })
    );
}

#[test]
fn rejects_set_bit_in_single_symbol_run() {
    // eight copies of one symbol pack into a zero byte with no padding
    let mut frame = compress_to_vec(&[b'z'; 8]);
    *frame.last_mut().unwrap() = 0b0001_0000;
    assert_eq!(
        decompress_to_vec(&frame),
        Err(FrameDecoderError::CorruptSymbolRun)
    );
}

#[test]
fn rejects_bad_padding_declaration() {
    let mut frame = compress_to_vec(b"aaab");
    frame[AAAB_PADDING_IDX] = 8;
    assert!(matches!(
        decompress_to_vec(&frame),
        Err(FrameDecoderError::FrameHeaderError(
            FrameHeaderError::InvalidPadding { got: 8 }
        ))
    ));
}

#[test]
fn error_messages_name_the_problem() {
    let mut frame = compress_to_vec(b"aaab");
    frame.pop();
    let err = decompress_to_vec(&frame).unwrap_err();
    assert!(err.to_string().contains("truncated"));
}
