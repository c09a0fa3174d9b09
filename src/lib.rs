//! # Huffman Coding
//!
//! *Optimal prefix codes, built from nothing but symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code already had the idea: give the common things short names.
//! Huffman coding does this mechanically for any input. Count how often
//! each byte occurs, then grow a binary tree bottom-up by repeatedly
//! gluing the two rarest things together — the rarer a byte, the deeper it
//! ends up, and the path from the root to its leaf *is* its code.
//!
//! Because codes live only at the leaves, no code is a prefix of another,
//! and a decoder can walk the tree bit by bit without any separators.
//!
//! ## The Problem
//!
//! A decoder needs two things the raw bitstream does not give it:
//! - **The tree.** This container serializes the tree shape itself into a
//!   compact header (one bit per node plus nine bits per leaf), so the
//!   format is self-describing and no frequency table is transmitted.
//! - **Where to stop.** The last byte is zero-padded, so the bit length is
//!   not recoverable from the byte length. A 257th pseudo-EOF symbol is
//!   coded into the tree and written once, after the real data; decoding
//!   stops when its leaf is reached.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon    Entropy as the fundamental limit
//! 1949  Fano       Top-down splitting; suboptimal on ties
//! 1952  Huffman    Bottom-up merging; provably optimal prefix codes
//! 1977  Ziv/Lempel Dictionary coding, usually paired with Huffman after
//! 1993  DEFLATE    Canonical Huffman in every zip and PNG since
//! ```
//!
//! David Huffman found the bottom-up construction as a student, sidestepping
//! the top-down approach his professor (Fano) had been stuck on.
//!
//! ## Mathematical Formulation
//!
//! For symbol probabilities $p_s$, Shannon entropy $H = -\sum_s p_s \log_2
//! p_s$ lower-bounds any prefix code's expected length. Huffman's tree
//! achieves an expected code length $L$ with $H \le L < H + 1$, the
//! optimum among integer-length prefix codes; the code lengths satisfy
//! Kraft's inequality $\sum_s 2^{-L_s} \le 1$ with equality.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n + k \log k)$ to compress ($n$ input bytes, $k \le 257$
//!   distinct symbols), $O(n)$ bit-walks to decompress.
//! - **Space**: $O(k)$ for the tree and code table.
//!
//! ## Failure Modes
//!
//! 1. **Corruption is unrecoverable**: the format has no checksums or
//!    redundancy; a flipped bit silently decodes to different output, and a
//!    missing tail is only detected as a truncated stream.
//! 2. **Small inputs grow**: the 32-bit tag plus the tree header outweigh
//!    the coded body for short or uniform inputs.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`compress`] / [`decompress`]: the in-memory codec over byte slices.
//! - [`compress_stream`] / [`decompress_stream`]: read-to-end wrappers over
//!   `std::io` sources and sinks.
//!
//! Tree construction is deterministic: weight ties are broken by a
//! sequence number assigned at node creation, so the same input always
//! produces byte-identical output.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Shannon, C. (1948). "A Mathematical Theory of Communication."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitio;
pub mod codec;
pub mod error;
pub mod header;
pub mod tree;

pub use codec::{compress, compress_stream, decompress, decompress_stream};
pub use error::{Error, Result};
