//! Huffcode: a canonical Huffman prefix coder.
//!
//! Version 0.1.0
//!
//! Builds an optimal binary prefix code from the byte frequencies of a sample,
//! then encodes bytes into a `'0'`/`'1'` character bit-string and decodes such a
//! bit-string back into bytes by walking the code tree. The character-string
//! surface is deliberate: this crate models the code itself, not a packed
//! compressed file format.
//!
//! The coder is built once and is immutable afterward, so encode and decode may
//! be called repeatedly and in any order, including from multiple threads
//! holding references to one coder.
//!
//! Basic usage:
//!
//! ```
//! use huffcode::huffman_coding::huffman::HuffmanCoder;
//!
//! let coder = HuffmanCoder::new(b"aaabbc");
//! let bits = coder.try_encode(b"aaabbc").unwrap();
//! assert_eq!(coder.try_decode(&bits).unwrap(), b"aaabbc");
//! ```
//!
pub mod huffman_coding;
pub mod tools;
