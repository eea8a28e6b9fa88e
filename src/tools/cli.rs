//! Command line interface for huffcode.
//!
//! Uses the external CLAP crate to parse arguments into the internal HuffOpts
//! structure used by the rest of the program.
//!
use std::fmt::{Display, Formatter};

use clap::Parser;
use log::info;

/// Encode, Decode, Codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
    Codes,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define all user settable options to control program behavior
#[derive(Debug)]
pub struct HuffOpts {
    /// Encode/Decode/Codes
    pub op_mode: Mode,
    /// Payload to process - literal data, bit-string, or marked file path
    pub payload: String,
    /// Optional sample the code table is built from
    pub key: Option<String>,
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "huffcode, a canonical Huffman prefix coder.",
    long_about = "
    Builds a Huffman prefix code from the byte frequencies of a sample and uses
    it to encode data into a '0'/'1' bit-string, or to decode such a bit-string
    back into bytes.

    A payload (or key) beginning with '/' names a file: the marker is stripped
    and the remainder is read as a path. Anything else is the literal data."
)]
pub struct Args {
    /// Data to encode, or with -d the bit-string to decode
    #[clap()]
    pub payload: String,

    /// Decode the payload bit-string instead of encoding
    #[clap(short = 'd', long = "decode")]
    pub decode: bool,

    /// Sample the code table is built from. Defaults to the payload when encoding; required when decoding
    #[clap(short = 'k', long = "key")]
    pub key: Option<String>,

    /// Print the code table instead of encoding
    #[clap(short = 'c', long = "codes")]
    pub codes: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    pub v: u8,
}

/// Put command line information from CLAP into our internal structure.
pub fn huffopts_init() -> HuffOpts {
    let args = Args::parse();

    // Set the log level
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    let op_mode = if args.codes {
        Mode::Codes
    } else if args.decode {
        Mode::Decode
    } else {
        Mode::Encode
    };

    // Below we report initialization status to the user
    info!("---- Huffcode Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", op_mode);
    match &args.key {
        Some(key) => info!("Building the code table from the key {}", key),
        None => info!("Building the code table from the payload"),
    }
    info!("---- Huffcode Initialization End ----\n");

    HuffOpts {
        op_mode,
        payload: args.payload,
        key: args.key,
    }
}
