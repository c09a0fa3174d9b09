use huff::{compress, decompress, Error};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_compress_roundtrip(
        input in prop::collection::vec(any::<u8>(), 0..4096),
    ) {
        let packed = compress(&input);
        let restored = decompress(&packed).unwrap();
        prop_assert_eq!(input, restored);
    }

    #[test]
    fn test_compress_is_deterministic(
        input in prop::collection::vec(any::<u8>(), 0..2048),
    ) {
        prop_assert_eq!(compress(&input), compress(&input));
    }

    #[test]
    fn test_decompress_never_panics_on_junk(
        data in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        // Arbitrary bytes must come back as a clean error (or, for the
        // vanishingly rare valid container, decode); never a panic.
        let _ = decompress(&data);
    }

    #[test]
    fn test_wrong_tag_rejected(
        tag in any::<u32>(),
        body in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(tag != huff::codec::HUFF_TREE);
        let mut data = tag.to_be_bytes().to_vec();
        data.extend_from_slice(&body);
        prop_assert!(matches!(
            decompress(&data),
            Err(Error::MalformedHeader(t)) if t == tag
        ));
    }
}
