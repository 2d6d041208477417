#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // arbitrary input must surface as a structured error, never a panic
    let _ = huffzip::decompress_to_vec(data);
});
