pub mod binread_utils;
pub mod binwrite_utils;

pub use binread_utils::OffsetTable;
pub use binwrite_utils::{BinLength, ConstBinLength, Pool};

use binread::io::{Read, Seek};
use binread::{BinRead, BinResult, ReadOptions};
use binwrite::{BinWrite, WriterOption};
use std::fmt;
use std::io;

/// `"SQB\0"`
pub const MAGIC: [u8; 4] = *b"SQB\0";

/// Format flag emitted by the writer. Whatever was read is not carried over.
pub const WRITTEN_FORMAT_FLAG: u16 = 1;

/// Size of one slot in the offset table.
pub const TABLE_ENTRY_SIZE: u32 = 4;

/// A 64-bit opaque identifier.
///
/// Stored as a plain little-endian u64, but displayed and edited as hex, so it
/// gets its own type rather than a bare `u64`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HexId(pub u64);

impl BinRead for HexId {
    type Args = ();

    fn read_options<R: Read + Seek>(reader: &mut R, ro: &ReadOptions, args: Self::Args) -> BinResult<Self> {
        Ok(HexId(u64::read_options(reader, ro, args)?))
    }
}

impl BinWrite for HexId {
    fn write_options<W: io::Write>(&self, writer: &mut W, options: &WriterOption) -> io::Result<()> {
        self.0.write_options(writer, options)
    }
}

impl ConstBinLength for HexId {
    const LENGTH: usize = 8;
}

impl From<u64> for HexId {
    fn from(id: u64) -> Self {
        HexId(id)
    }
}

impl From<HexId> for u64 {
    fn from(id: HexId) -> Self {
        id.0
    }
}

impl fmt::LowerHex for HexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for HexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::Debug for HexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HexId({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binread::BinReaderExt;
    use binread::io::Cursor;

    #[test]
    fn hex_id_display_is_zero_padded() {
        assert_eq!(HexId(0x1).to_string(), "0x00000001");
        assert_eq!(HexId(0xabcd).to_string(), "0x0000abcd");
        // wider than the padding, nothing gets cut off
        assert_eq!(HexId(0x1_2345_6789).to_string(), "0x123456789");
    }

    #[test]
    fn hex_id_is_little_endian() {
        let bytes = [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01];
        let id: HexId = Cursor::new(bytes).read_le().unwrap();
        assert_eq!(id, HexId(0x0102_0304_0506_0708));

        let mut out = Vec::new();
        id.write_options(&mut out, &binwrite::writer_option_new!(endian: binwrite::Endian::Little)).unwrap();
        assert_eq!(out, bytes);
    }
}
