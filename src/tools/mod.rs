//! The tools module provides the helper functions that surround the huffcode coder.
//!
//! The tools are:
//! - cli: Command line interface for huffcode.
//! - data_in: Resolves a command line payload into the raw bytes it stands for.
//! - freq_count: Frequency count of the input sample.
//!
pub mod cli;
pub mod data_in;
pub mod freq_count;
