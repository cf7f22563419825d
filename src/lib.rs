//! Reader and writer for SQB files: offset-indexed tables of weighted
//! sequences.
//!
//! ```text
//! 0x00  "SQB\0"
//! 0x04  u16 format flag
//! 0x06  u16 sequence count N
//! 0x08  u32 table size (4 * N)
//! 0x0C  N * u32 offsets, relative to 0x0C + 4 * N
//!       sequence records
//! ```
//!
//! Everything is little-endian.

pub mod common;
pub mod convert;
pub mod error;
pub mod sqb;
pub mod text;

pub use common::HexId;
pub use error::FormatError;
pub use sqb::{Container, Entry, Sequence};

use binread::io::{Read, Seek};
use std::io::Write;

pub fn decode(bytes: &[u8]) -> Result<Container, FormatError> {
    Container::from_bytes(bytes)
}

/// Always produces the canonical layout: sequences back-to-back in list order,
/// format flag 1, zeroed padding.
pub fn encode(container: &Container) -> Result<Vec<u8>, FormatError> {
    container.to_bytes()
}

pub fn read_from<R: Read + Seek>(reader: &mut R) -> Result<Container, FormatError> {
    Container::read_from(reader)
}

pub fn write_to<W: Write>(container: &Container, writer: &mut W) -> Result<(), FormatError> {
    container.write_to(writer)
}
