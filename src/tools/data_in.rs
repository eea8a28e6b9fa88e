//! Resolves a command line payload into the raw bytes it stands for.
//!
//! A payload beginning with the path marker names a file: the marker is
//! stripped and the remainder is read as a path, so `//tmp/sample.txt` reads
//! the absolute path `/tmp/sample.txt`. Any other payload is the literal byte
//! data itself. The coder never touches storage; this is the only place the
//! filesystem appears.
//!
use std::{fs, io};

use log::info;

/// Leading character that marks a payload as a file path.
pub const PATH_MARKER: char = '/';

/// Substitute a marked payload with its file's contents, or pass the payload
/// bytes through verbatim. Standard IO errors are returned to the caller.
pub fn resolve(payload: &str) -> Result<Vec<u8>, io::Error> {
    match payload.strip_prefix(PATH_MARKER) {
        Some(path) => {
            info!("Reading input from the file {}", path);
            fs::read(path)
        }
        None => Ok(payload.as_bytes().to_vec()),
    }
}
