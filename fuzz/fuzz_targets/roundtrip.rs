#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = huffzip::compress_to_vec(data);
    let decompressed = huffzip::decompress_to_vec(&compressed).unwrap();
    assert_eq!(data, decompressed.as_slice());
});
