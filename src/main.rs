//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]
mod huffman_coding;
mod tools;

use std::io::{self, ErrorKind, Write};

use huffman_coding::huffman::HuffmanCoder;
use tools::cli::{huffopts_init, HuffOpts, Mode};
use tools::data_in;

use log::{error, info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let options = huffopts_init();

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode {
        Mode::Encode => encode_payload(&options),
        Mode::Decode => decode_payload(&options),
        Mode::Codes => list_codes(&options),
    };

    info!("Done.\n");
    result
}

/// Build a coder from the key sample (or the payload itself) and print the
/// payload's bit-string encoding on stdout.
fn encode_payload(opts: &HuffOpts) -> Result<(), io::Error> {
    let data = data_in::resolve(&opts.payload)?;
    let sample = match &opts.key {
        Some(key) => data_in::resolve(key)?,
        None => data.clone(),
    };

    let coder = HuffmanCoder::new(&sample);
    match coder.try_encode(&data) {
        Ok(bits) => {
            info!("Encoded {} bytes into {} bits", data.len(), bits.len());
            println!("{}", bits);
            Ok(())
        }
        Err(e) => {
            error!("Encoding failed: {}", e);
            Err(io::Error::new(ErrorKind::InvalidInput, e))
        }
    }
}

/// Rebuild the coder from the key sample and print the bytes decoded from the
/// payload bit-string on stdout.
fn decode_payload(opts: &HuffOpts) -> Result<(), io::Error> {
    let key = match &opts.key {
        Some(key) => data_in::resolve(key)?,
        None => {
            warn!("Decoding requires the key sample the code was built from (-k)");
            return Err(io::Error::new(ErrorKind::InvalidInput, "no key sample"));
        }
    };
    let bits = String::from_utf8_lossy(&data_in::resolve(&opts.payload)?).into_owned();

    let coder = HuffmanCoder::new(&key);
    match coder.try_decode(&bits) {
        Ok(bytes) => {
            info!("Decoded {} bits into {} bytes", bits.len(), bytes.len());
            io::stdout().write_all(&bytes)?;
            println!();
            Ok(())
        }
        Err(e) => {
            error!("Decoding failed: {}", e);
            Err(io::Error::new(ErrorKind::InvalidData, e))
        }
    }
}

/// Print the code table derived from the key sample (or the payload itself),
/// one symbol per line in ascending symbol order.
fn list_codes(opts: &HuffOpts) -> Result<(), io::Error> {
    let sample = match &opts.key {
        Some(key) => data_in::resolve(key)?,
        None => data_in::resolve(&opts.payload)?,
    };

    let coder = HuffmanCoder::new(&sample);
    let mut table: Vec<(u8, &str)> = coder
        .code_table()
        .iter()
        .map(|(&sym, code)| (sym, code.as_str()))
        .collect();
    table.sort_unstable_by_key(|&(sym, _)| sym);

    info!("Code table holds {} symbols", table.len());
    for (sym, code) in table {
        if sym.is_ascii_graphic() {
            println!("{:>4} ({}) {}", sym, sym as char, code);
        } else {
            println!("{:>4}     {}", sym, code);
        }
    }
    Ok(())
}
