//! Bit-granular reading and writing over byte buffers.
//!
//! Both halves work most-significant-bit-first: the first bit written lands
//! in the high bit of the first byte, and `read_bits`/`write_bits` treat a
//! multi-bit field as a big-endian unsigned integer of exactly that width.
//! The compressed container is bit-packed with no alignment anywhere, so
//! every field narrower than a byte goes through this module.

/// Sequential bit reader over a byte slice.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Absolute position in bits from the start of `data`.
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read `count` bits (1 to 32) as an unsigned integer, MSB first.
    ///
    /// Returns `None` without consuming anything if fewer than `count`
    /// bits remain.
    pub fn read_bits(&mut self, count: u32) -> Option<u32> {
        debug_assert!((1..=32).contains(&count));
        if self.remaining() < count as usize {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..count {
            let byte = self.data[self.pos / 8];
            let bit = (byte >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | bit as u32;
            self.pos += 1;
        }
        Some(value)
    }

    /// Number of unread bits left in the source.
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Rewind to the first bit of the source.
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}

/// Bit writer accumulating into an owned byte buffer.
#[derive(Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    /// Total bits written so far.
    len: usize,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `count` bits (1 to 32) of `value`, MSB first.
    pub fn write_bits(&mut self, count: u32, value: u32) {
        debug_assert!((1..=32).contains(&count));
        for shift in (0..count).rev() {
            let bit = (value >> shift) & 1;
            if self.len % 8 == 0 {
                self.bytes.push(0);
            }
            if bit != 0 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 1 << (7 - self.len % 8);
            }
            self.len += 1;
        }
    }

    /// Total bits written so far.
    pub fn bit_len(&self) -> usize {
        self.len
    }

    /// Finalize and return the buffer; a trailing partial byte stays
    /// zero-padded.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_writer_msb_first() {
        let mut w = BitWriter::new();
        w.write_bits(8, 0xA5);
        assert_eq!(w.finish(), vec![0xA5]);
    }

    #[test]
    fn test_writer_pads_final_byte_with_zeros() {
        let mut w = BitWriter::new();
        w.write_bits(3, 0b101);
        assert_eq!(w.bit_len(), 3);
        assert_eq!(w.finish(), vec![0b1010_0000]);
    }

    #[test]
    fn test_writer_masks_high_bits() {
        let mut w = BitWriter::new();
        // Only the low 4 bits of the value count.
        w.write_bits(4, 0xFF3);
        w.write_bits(4, 0x2);
        assert_eq!(w.finish(), vec![0x32]);
    }

    #[test]
    fn test_reader_crosses_byte_boundaries() {
        let mut r = BitReader::new(&[0b1100_1010, 0b0111_0000]);
        assert_eq!(r.read_bits(3), Some(0b110));
        assert_eq!(r.read_bits(9), Some(0b0_1010_0111));
        assert_eq!(r.remaining(), 4);
    }

    #[test]
    fn test_reader_exhaustion_does_not_consume() {
        let mut r = BitReader::new(&[0xFF]);
        assert_eq!(r.read_bits(6), Some(0b11_1111));
        // Two bits left: a 3-bit read fails, then the 2-bit read still works.
        assert_eq!(r.read_bits(3), None);
        assert_eq!(r.read_bits(2), Some(0b11));
        assert_eq!(r.read_bits(1), None);
    }

    #[test]
    fn test_reader_reset_rewinds() {
        let mut r = BitReader::new(&[0x0F, 0xF0]);
        assert_eq!(r.read_bits(12), Some(0x0FF));
        r.reset();
        assert_eq!(r.read_bits(8), Some(0x0F));
    }

    #[test]
    fn test_empty_source() {
        let mut r = BitReader::new(&[]);
        assert_eq!(r.remaining(), 0);
        assert_eq!(r.read_bits(1), None);
    }

    proptest! {
        #[test]
        fn prop_write_read_roundtrip(
            fields in prop::collection::vec((1u32..=32, any::<u32>()), 0..64),
        ) {
            let mut w = BitWriter::new();
            for &(count, value) in &fields {
                w.write_bits(count, value);
            }
            let bytes = w.finish();

            let mut r = BitReader::new(&bytes);
            for &(count, value) in &fields {
                let mask = if count == 32 { u32::MAX } else { (1u32 << count) - 1 };
                prop_assert_eq!(r.read_bits(count), Some(value & mask));
            }
        }
    }
}
