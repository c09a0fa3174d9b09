use huff::{compress, decompress};

fn main() {
    // Skewed but aperiodic distribution, 64 KiB.
    let mut state = 0x2545_f491u32;
    let input = (0..65536)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            ((state >> 24) & 0x3f) as u8
        })
        .collect::<Vec<_>>();

    for _ in 0..500 {
        let packed = compress(&input);
        let restored = decompress(&packed).unwrap();
        assert_eq!(restored.len(), input.len());
    }
}
