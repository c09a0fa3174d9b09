//! Serialization of the tree shape into the container header.
//!
//! The header is a prefix code for the tree itself, written in strict
//! pre-order: an internal node is a single 0 bit followed by its left then
//! right subtree; a leaf is a single 1 bit followed by its symbol in
//! [`SYMBOL_BITS`] bits. Parsing is unambiguous because every subtree is
//! fully consumed before control returns to the parent. Weights are not
//! serialized; the decoder only needs the shape and the leaf symbols.

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::tree::{Node, ALPHABET_SIZE, BITS_PER_WORD, PSEUDO_EOF};

/// Width of a serialized leaf symbol: one bit more than a byte, because
/// the alphabet includes the pseudo-EOF value 256.
pub const SYMBOL_BITS: u32 = BITS_PER_WORD + 1;

/// Write the tree shape to `out` in pre-order.
pub fn write_tree(node: &Node, out: &mut BitWriter) {
    match node {
        Node::Leaf { symbol, .. } => {
            out.write_bits(1, 1);
            out.write_bits(SYMBOL_BITS, u32::from(*symbol));
        }
        Node::Internal { left, right, .. } => {
            out.write_bits(1, 0);
            write_tree(left, out);
            write_tree(right, out);
        }
    }
}

/// Reconstruct a tree from its pre-order serialization.
///
/// # Errors
/// [`Error::TruncatedStream`] if the source ends mid-header, and
/// [`Error::CorruptHeader`] if a leaf symbol falls outside the alphabet
/// (nine bits can express up to 511) or the shape nests deeper than any
/// tree over this alphabet can.
pub fn read_tree(input: &mut BitReader<'_>) -> Result<Node> {
    read_node(input, 0)
}

fn read_node(input: &mut BitReader<'_>, depth: usize) -> Result<Node> {
    // A tree over 257 leaves has paths of at most 256 edges; anything
    // deeper cannot have come from the encoder, and recursing into it
    // would let a crafted run of 0 bits exhaust the stack.
    if depth > ALPHABET_SIZE {
        return Err(Error::CorruptHeader("tree deeper than the alphabet allows"));
    }
    match input.read_bits(1) {
        None => Err(Error::TruncatedStream("tree header")),
        Some(0) => {
            let left = read_node(input, depth + 1)?;
            let right = read_node(input, depth + 1)?;
            Ok(Node::Internal {
                left: Box::new(left),
                right: Box::new(right),
                weight: 0,
            })
        }
        Some(_) => {
            let symbol = input
                .read_bits(SYMBOL_BITS)
                .ok_or(Error::TruncatedStream("leaf symbol"))? as u16;
            if symbol > PSEUDO_EOF {
                return Err(Error::CorruptHeader("leaf symbol outside the alphabet"));
            }
            Ok(Node::Leaf { symbol, weight: 0 })
        }
    }
}
