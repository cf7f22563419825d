pub mod entry;
pub mod sequence;

pub use entry::Entry;
pub use sequence::Sequence;

use crate::common::*;
use crate::error::FormatError;
use binread::io::{Cursor, Read, Seek};
use binread::{BinRead, BinReaderExt, BinResult, ReadOptions};
use binwrite::{BinWrite, WriterOption};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::io::{self, Write};

/// The fixed 12 bytes at the start of every file.
#[derive(BinRead, Debug, Clone, Copy, PartialEq, Eq)]
#[br(little, magic = b"SQB\0")]
pub struct Header {
    // unknown, always 1 in files we write
    pub format_flag: u16,
    pub sequence_count: u16,
    // not needed to decode; 4 * sequence_count in files we write
    pub table_size: u32,
}

impl Header {
    pub const LENGTH: u64 = 12;

    pub fn table_size_matches(&self) -> bool {
        u64::from(self.table_size) == u64::from(TABLE_ENTRY_SIZE) * u64::from(self.sequence_count)
    }
}

/// A container as it sits on disk, offsets included.
#[derive(BinRead, Debug, Clone, PartialEq)]
#[br(little)]
pub struct RawContainer {
    pub header: Header,
    #[br(count = header.sequence_count)]
    pub table: OffsetTable<Sequence>,
}

impl From<RawContainer> for Container {
    fn from(raw: RawContainer) -> Self {
        Container {
            format_flag: raw.header.format_flag,
            sequences: raw.table.into_inner(),
        }
    }
}

/// A decoded SQB file.
///
/// `format_flag` keeps whatever was read, but the writer always emits
/// [`WRITTEN_FORMAT_FLAG`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct Container {
    #[serde(default = "written_format_flag")]
    pub format_flag: u16,
    pub sequences: Vec<Sequence>,
}

fn written_format_flag() -> u16 {
    WRITTEN_FORMAT_FLAG
}

impl Container {
    pub fn new(sequences: Vec<Sequence>) -> Result<Self, FormatError> {
        let container = Container {
            format_flag: WRITTEN_FORMAT_FLAG,
            sequences,
        };
        container.validate()?;
        Ok(container)
    }

    /// Checks every count that ends up in a `u16` on disk.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.sequences.len() > usize::from(u16::MAX) {
            return Err(FormatError::TooManySequences(self.sequences.len()));
        }

        self.sequences.iter().try_for_each(Sequence::validate)
    }

    pub fn read_from<R: Read + Seek>(reader: &mut R) -> Result<Self, FormatError> {
        Ok(reader.read_le()?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        Container::read_from(&mut Cursor::new(bytes))
    }

    /// Validates, then writes the canonical layout.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), FormatError> {
        self.validate()?;
        Ok(self.write(writer)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, FormatError> {
        let mut out = Vec::with_capacity(self.serialized_length());
        self.write_to(&mut out)?;
        Ok(out)
    }
}

impl BinRead for Container {
    type Args = ();

    fn read_options<R: Read + Seek>(reader: &mut R, ro: &ReadOptions, args: Self::Args) -> BinResult<Self> {
        let raw = RawContainer::read_options(reader, ro, args)?;

        if !raw.header.table_size_matches() {
            warn!(
                "table size 0x{:X} doesn't match {} sequences, ignoring",
                raw.header.table_size, raw.header.sequence_count
            );
        }
        for (seq, pos) in raw.table.entries.iter().zip(raw.table.positions()) {
            debug!("sequence {} @ 0x{:X}: {} entries", seq.id, pos, seq.entries.len());
        }

        Ok(raw.into())
    }
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

impl BinWrite for Container {
    fn write_options<W: Write>(&self, writer: &mut W, options: &WriterOption) -> io::Result<()> {
        let mut options = options.clone();
        options.endian = binwrite::Endian::Little;

        let count = u16::try_from(self.sequences.len())
            .map_err(|_| invalid_data(format!("{} sequences don't fit in a u16 count", self.sequences.len())))?;

        let mut pool = Pool::new();
        let offsets = self
            .sequences
            .iter()
            .map(|seq| u32::try_from(pool.push(seq)))
            .collect::<Result<Vec<u32>, _>>()
            .map_err(|_| invalid_data("sequence data doesn't fit in 32-bit offsets".into()))?;

        debug!("writing {} sequences, 0x{:X} bytes of sequence data", count, pool.serialized_length());

        (MAGIC, WRITTEN_FORMAT_FLAG, count, TABLE_ENTRY_SIZE * u32::from(count)).write_options(writer, &options)?;
        offsets.write_options(writer, &options)?;
        pool.write_options(writer, &options)
    }
}

impl BinLength for Container {
    fn serialized_length(&self) -> usize {
        Header::LENGTH as usize
            + TABLE_ENTRY_SIZE as usize * self.sequences.len()
            + self.sequences.serialized_length()
    }
}
