//! The huffman_coding module builds the code tree and code table for huffcode
//! and performs the encoding and decoding against them.
//!
//! Construction is a one-shot pipeline: count byte frequencies, merge the two
//! lightest nodes until a single root remains, then walk the finished tree once
//! to read off each symbol's root-to-leaf path as its code. The tree and table
//! are never mutated afterward; encode is a table lookup per byte and decode is
//! a bit-by-bit walk of the tree.
//!
//! The process is inherently sequential and does not benefit from
//! multithreading, but the finished coder is freely shareable across threads.
//!
pub mod code_table;
pub mod huffman;
pub mod tree;
