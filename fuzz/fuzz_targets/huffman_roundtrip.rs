#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let packed = huff::compress(data);
    let restored = huff::decompress(&packed).unwrap();
    assert_eq!(restored, data);

    // The raw fuzz input doubles as a hostile container: decompression may
    // fail, but must never panic or overflow the stack.
    let _ = huff::decompress(data);
});
