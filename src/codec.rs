//! Container-level compression and decompression.
//!
//! Wire layout, in order, bit-packed with no alignment between fields:
//!
//! ```text
//! +--------------------+---------------------+----------------------+
//! | 32-bit format tag  | serialized tree     | Huffman-coded body   |
//! | HUFF_TREE          | (header module)     | terminated by the    |
//! |                    |                     | pseudo-EOF code      |
//! +--------------------+---------------------+----------------------+
//! ```
//!
//! There is no length field and no checksum; the pseudo-EOF code is the
//! only terminator, and the final partial byte is zero-padded. Compression
//! reads the input twice (a counting pass and an encoding pass over the
//! same words); decompression is a single pass that reads exactly as many
//! bits as it needs.

use std::io::{Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::header::{read_tree, write_tree};
use crate::tree::{build_codes, build_tree, count_frequencies, Node, BITS_PER_WORD, PSEUDO_EOF};

/// Base magic number of the container family.
pub const HUFF_NUMBER: u32 = 0xface_8200;

/// Format tag for tree-header framing, the only framing supported.
pub const HUFF_TREE: u32 = HUFF_NUMBER | 1;

/// Width of the leading format tag.
const BITS_PER_INT: u32 = 32;

/// Compress `input` into a self-contained container.
///
/// Two passes over the source: one to count symbol frequencies, one to
/// emit codes. Every invocation builds its own tree and code table, so the
/// output depends on nothing but `input` and is byte-identical across
/// calls.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let mut source = BitReader::new(input);
    let counts = count_frequencies(&mut source);
    let root = build_tree(&counts);
    let codes = build_codes(&root);

    let mut out = BitWriter::new();
    out.write_bits(BITS_PER_INT, HUFF_TREE);
    write_tree(&root, &mut out);

    source.reset();
    while let Some(word) = source.read_bits(BITS_PER_WORD) {
        for &bit in &codes[word as usize] {
            out.write_bits(1, u32::from(bit));
        }
    }
    // Mandatory terminator, the whole body for an empty input.
    for &bit in &codes[PSEUDO_EOF as usize] {
        out.write_bits(1, u32::from(bit));
    }
    out.finish()
}

/// Decompress a container produced by [`compress`].
///
/// # Errors
/// [`Error::MalformedHeader`] if the leading tag is wrong,
/// [`Error::CorruptHeader`] if the serialized tree is invalid, and
/// [`Error::TruncatedStream`] if the data ends before the pseudo-EOF code.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut input = BitReader::new(data);
    let tag = input
        .read_bits(BITS_PER_INT)
        .ok_or(Error::TruncatedStream("format tag"))?;
    if tag != HUFF_TREE {
        return Err(Error::MalformedHeader(tag));
    }

    let root = read_tree(&mut input)?;
    if let Node::Leaf { .. } = root {
        // The encoder wraps degenerate trees, so a leaf root cannot be
        // walked and cannot be legitimate.
        return Err(Error::CorruptHeader("root is a leaf"));
    }
    decode_body(&root, &mut input)
}

/// Walk root-to-leaf paths until the pseudo-EOF leaf is reached.
fn decode_body(root: &Node, input: &mut BitReader<'_>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut current = root;
    loop {
        let bit = input
            .read_bits(1)
            .ok_or(Error::TruncatedStream("symbol stream"))?;
        current = match current {
            Node::Internal { left, right, .. } => {
                if bit == 0 {
                    left
                } else {
                    right
                }
            }
            // `current` is reset to the (internal) root after every
            // emitted symbol, so it is never a leaf at the top of the loop.
            Node::Leaf { .. } => unreachable!(),
        };

        if let Node::Leaf { symbol, .. } = current {
            if *symbol == PSEUDO_EOF {
                break;
            }
            out.push(*symbol as u8);
            current = root;
        }
    }
    Ok(out)
}

/// Read `input` to its end, compress it, and write the container to
/// `output`. Returns the number of compressed bytes written.
pub fn compress_stream<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<u64> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;
    let packed = compress(&raw);
    output.write_all(&packed)?;
    Ok(packed.len() as u64)
}

/// Read a container from `input` to its end, decompress it, and write the
/// original bytes to `output`. Returns the number of bytes written.
pub fn decompress_stream<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<u64> {
    let mut packed = Vec::new();
    input.read_to_end(&mut packed)?;
    let raw = decompress(&packed)?;
    output.write_all(&raw)?;
    Ok(raw.len() as u64)
}
