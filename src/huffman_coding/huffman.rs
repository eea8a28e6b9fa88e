//! The Huffman coder at the center of huffcode.
//!
//! Construction runs the whole pipeline once: frequency count, tree build,
//! code table derivation. The finished coder holds only the tree root and the
//! code table, both immutable, so encode and decode are read-only and may be
//! called repeatedly in any order.
//!
//! The `try_` entry points report failures through [`CodeError`]. The plain
//! `encode`/`decode` entry points keep the legacy convention of the system
//! this crate reproduces: any failure flattens to an empty result,
//! indistinguishable from a legitimately empty input. New callers should
//! prefer the `try_` forms.
//!
use std::fmt;

use log::trace;
use rustc_hash::FxHashMap;

use super::code_table::derive_codes;
use super::tree::{build_tree, Node, NodeData};
use crate::tools::freq_count::freqs;

/// Failure modes of encode and decode. Construction never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// Encode met a byte that never appeared in the construction sample.
    UnknownSymbol(u8),
    /// Decode took a step that leads outside the tree, at this bit position.
    DeadPath(usize),
    /// The bit-string ran out partway down a code path.
    TruncatedBits,
    /// The coder was built from empty input, so no bits can be decoded.
    EmptyTree,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeError::UnknownSymbol(sym) => write!(f, "symbol {:#04x} has no code", sym),
            CodeError::DeadPath(pos) => write!(f, "bit {} leads outside the code tree", pos),
            CodeError::TruncatedBits => write!(f, "bit-string ends in the middle of a code"),
            CodeError::EmptyTree => write!(f, "coder was built from empty input"),
        }
    }
}

impl std::error::Error for CodeError {}

/// A canonical Huffman prefix coder, built once from a sample of bytes.
#[derive(Debug, Clone)]
pub struct HuffmanCoder {
    root: Option<Box<Node>>,
    codes: FxHashMap<u8, String>,
}

impl HuffmanCoder {
    /// Build a coder from a sample of bytes. Total over any sample: an empty
    /// sample yields a coder with no tree and an empty code table.
    pub fn new(sample: &[u8]) -> Self {
        let freq_map = freqs(sample);
        let root = build_tree(&freq_map);
        let codes = derive_codes(root.as_deref());
        trace!(
            "Built a code table of {} symbols from {} sample bytes",
            codes.len(),
            sample.len()
        );
        Self { root, codes }
    }

    /// The stored code for a symbol, or None if the symbol was not in the
    /// construction sample.
    pub fn get_code(&self, symbol: u8) -> Option<&str> {
        self.codes.get(&symbol).map(|code| code.as_str())
    }

    /// The full symbol-to-code table.
    pub fn code_table(&self) -> &FxHashMap<u8, String> {
        &self.codes
    }

    /// Encode bytes into a '0'/'1' bit-string by concatenating each byte's
    /// code in input order. A byte without a code fails the whole operation;
    /// no partial encoding is returned.
    pub fn try_encode(&self, input: &[u8]) -> Result<String, CodeError> {
        let mut bits = String::new();
        for &byte in input {
            match self.codes.get(&byte) {
                Some(code) => bits.push_str(code),
                None => return Err(CodeError::UnknownSymbol(byte)),
            }
        }
        Ok(bits)
    }

    /// Legacy encode: an empty string on any failure, indistinguishable from
    /// the encoding of an empty input.
    pub fn encode(&self, input: &[u8]) -> String {
        self.try_encode(input).unwrap_or_default()
    }

    /// Decode a '0'/'1' bit-string back into bytes by walking the tree: '1'
    /// descends right, anything else descends left, and reaching a leaf emits
    /// its symbol and restarts at the root. A bit-string that does not end
    /// exactly on a leaf fails; no partial decoding is returned.
    pub fn try_decode(&self, bits: &str) -> Result<Vec<u8>, CodeError> {
        let root = match &self.root {
            Some(root) => root,
            None => {
                if bits.is_empty() {
                    return Ok(vec![]);
                }
                return Err(CodeError::EmptyTree);
            }
        };

        // A lone leaf root carries the fixed code "0". Every bit must match
        // it, each one emitting the symbol.
        if let NodeData::Leaf(sym) = root.node_data {
            let mut output = Vec::with_capacity(bits.len());
            for (pos, bit) in bits.chars().enumerate() {
                if bit != '0' {
                    return Err(CodeError::DeadPath(pos));
                }
                output.push(sym);
            }
            return Ok(output);
        }

        let mut output = Vec::new();
        let mut walker = Walker::new(root);
        for (pos, bit) in bits.chars().enumerate() {
            match walker.step(bit) {
                Step::Emit(sym) => output.push(sym),
                Step::Descend => (),
                Step::Dead => return Err(CodeError::DeadPath(pos)),
            }
        }
        if walker.mid_path() {
            return Err(CodeError::TruncatedBits);
        }
        Ok(output)
    }

    /// Legacy decode: an empty byte sequence on any failure, indistinguishable
    /// from the decoding of an empty bit-string.
    pub fn decode(&self, bits: &str) -> Vec<u8> {
        self.try_decode(bits).unwrap_or_default()
    }
}

/// Outcome of advancing the decode walker by one bit.
enum Step {
    /// The bit completed a code; this symbol was emitted.
    Emit(u8),
    /// The bit descended to an internal node; more bits are needed.
    Descend,
    /// The bit stepped from a terminal position. Unreachable in a well-formed
    /// tree; kept as a guard against structural corruption.
    Dead,
}

/// Decode cursor over the tree. Starts at the root and advances one bit per
/// step, returning to the root whenever a leaf emits its symbol.
struct Walker<'a> {
    root: &'a Node,
    at: &'a Node,
}

impl<'a> Walker<'a> {
    fn new(root: &'a Node) -> Self {
        Self { root, at: root }
    }

    /// Advance one bit: '1' descends right, anything else descends left.
    fn step(&mut self, bit: char) -> Step {
        let (left, right) = match &self.at.node_data {
            NodeData::Kids(left, right) => (left, right),
            NodeData::Leaf(_) => return Step::Dead,
        };
        let next: &'a Node = if bit == '1' { right } else { left };
        match next.node_data {
            NodeData::Leaf(sym) => {
                self.at = self.root;
                Step::Emit(sym)
            }
            NodeData::Kids(..) => {
                self.at = next;
                Step::Descend
            }
        }
    }

    /// True when the last step left the cursor partway down a code path.
    fn mid_path(&self) -> bool {
        !std::ptr::eq(self.at, self.root)
    }
}

#[cfg(test)]
mod test {
    use super::{CodeError, HuffmanCoder};

    #[test]
    fn round_trip_test() {
        let sample = b"the quick brown fox jumps over the lazy dog";
        let coder = HuffmanCoder::new(sample);
        let bits = coder.try_encode(sample).unwrap();
        assert_eq!(coder.try_decode(&bits).unwrap(), sample);
    }

    #[test]
    fn round_trip_same_alphabet_test() {
        // Any input drawn from the construction alphabet must round-trip.
        let coder = HuffmanCoder::new(b"abcabcabc");
        let bits = coder.try_encode(b"ccbbaacba").unwrap();
        assert_eq!(coder.try_decode(&bits).unwrap(), b"ccbbaacba");
    }

    #[test]
    fn exact_scenario_test() {
        let coder = HuffmanCoder::new(b"aaabbc");
        assert_eq!(coder.get_code(b'a'), Some("0"));
        assert_eq!(coder.get_code(b'b'), Some("10"));
        assert_eq!(coder.get_code(b'c'), Some("11"));
        let bits = coder.encode(b"aaabbc");
        assert_eq!(bits, "000101011");
        assert_eq!(coder.decode(&bits), b"aaabbc");
    }

    #[test]
    fn get_code_absent_test() {
        let coder = HuffmanCoder::new(b"aab");
        assert_eq!(coder.get_code(b'z'), None);
    }

    #[test]
    fn unknown_symbol_test() {
        let coder = HuffmanCoder::new(b"aab");
        assert_eq!(
            coder.try_encode(b"aabc"),
            Err(CodeError::UnknownSymbol(b'c'))
        );
        // Legacy surface flattens the failure to an empty string.
        assert_eq!(coder.encode(b"aabc"), "");
    }

    #[test]
    fn single_symbol_test() {
        let coder = HuffmanCoder::new(b"cccc");
        assert_eq!(coder.get_code(b'c'), Some("0"));
        assert_eq!(coder.encode(b"cccc"), "0000");
        assert_eq!(coder.decode("00000"), b"ccccc");
        // Anything but '0' breaks the fixed code.
        assert_eq!(coder.try_decode("001"), Err(CodeError::DeadPath(2)));
        assert_eq!(coder.decode("001"), b"");
    }

    #[test]
    fn empty_input_test() {
        let coder = HuffmanCoder::new(b"");
        assert!(coder.code_table().is_empty());
        assert_eq!(coder.encode(b""), "");
        assert_eq!(coder.decode(""), b"");
        // Bits against a coder with no tree cannot decode.
        assert_eq!(coder.try_decode("010"), Err(CodeError::EmptyTree));
        assert_eq!(coder.decode("010"), b"");
        assert_eq!(coder.encode(b"a"), "");
    }

    #[test]
    fn truncated_bits_test() {
        // Codes are a="0", b="10", c="11"; a lone '1' stops mid-path.
        let coder = HuffmanCoder::new(b"aaabbc");
        assert_eq!(coder.try_decode("1"), Err(CodeError::TruncatedBits));
        assert_eq!(coder.decode("1"), b"");
        assert_eq!(coder.try_decode("0101"), Err(CodeError::TruncatedBits));
    }

    #[test]
    fn non_bit_characters_decode_left_test() {
        // Anything that is not '1' walks left, exactly like '0'.
        let coder = HuffmanCoder::new(b"aaabbc");
        assert_eq!(coder.decode("x"), b"a");
        assert_eq!(coder.decode("1x"), b"b");
    }

    #[test]
    fn stateless_repeat_calls_test() {
        // Encode and decode share no state between calls.
        let coder = HuffmanCoder::new(b"aaabbc");
        assert_eq!(coder.decode("11"), b"c");
        assert_eq!(coder.decode("11"), b"c");
        let bits = coder.encode(b"cab");
        assert_eq!(bits, "11010");
        assert_eq!(coder.encode(b"cab"), bits);
    }

    #[test]
    fn full_byte_range_round_trip_test() {
        let sample: Vec<u8> = (0..=255).cycle().take(1024).collect();
        let coder = HuffmanCoder::new(&sample);
        let bits = coder.try_encode(&sample).unwrap();
        assert_eq!(coder.try_decode(&bits).unwrap(), sample);
    }
}
