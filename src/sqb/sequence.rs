use super::Entry;
use crate::common::binwrite_utils::{write_counted, COUNTED_PREFIX_LENGTH};
use crate::common::{BinLength, ConstBinLength, HexId};
use crate::error::FormatError;
use binread::derive_binread;
use binwrite::BinWrite;
use serde::{Deserialize, Serialize};

/// A sequence record: an id, an opaque flag, and its entries.
///
/// On disk the entries are preceded by a `u16` count and four bytes of padding.
/// The count always comes from `entries.len()` when writing, and the padding is
/// written back as zero.
#[derive_binread]
#[derive(BinWrite, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[br(little)]
#[binwrite(little)]
#[serde(deny_unknown_fields)]
pub struct Sequence {
    pub id: HexId,
    pub flag: u16,

    #[br(temp)]
    entry_count: u16,
    #[br(temp)]
    _padding: u32,

    #[br(count = entry_count)]
    #[binwrite(with(write_counted))]
    pub entries: Vec<Entry>,
}

impl Sequence {
    pub fn new(id: HexId, flag: u16, entries: Vec<Entry>) -> Result<Self, FormatError> {
        let sequence = Sequence {
            id,
            flag,
            entries,
        };
        sequence.validate()?;
        Ok(sequence)
    }

    /// Checks that the entry count fits in its `u16` field.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.entries.len() > usize::from(u16::MAX) {
            return Err(FormatError::TooManyEntries {
                id: self.id,
                count: self.entries.len(),
            });
        }

        Ok(())
    }
}

impl BinLength for Sequence {
    fn serialized_length(&self) -> usize {
        HexId::LENGTH + u16::LENGTH + COUNTED_PREFIX_LENGTH + self.entries.serialized_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binread::io::Cursor;
    use binread::BinReaderExt;

    fn entry(id: u64, probability: u16) -> Entry {
        Entry {
            id: HexId(id),
            field_a: 0,
            probability,
            field_c: 0,
            field_d: -2,
            field_e: 0,
        }
    }

    #[test]
    fn empty_sequence() {
        let data: [u8; 16] = [
            0x01, 0, 0, 0, 0, 0, 0, 0, // id
            0x00, 0x00, // flag
            0x00, 0x00, // count
            0x00, 0x00, 0x00, 0x00, // padding
        ];

        let seq: Sequence = Cursor::new(data).read_le().unwrap();
        assert_eq!(seq, Sequence::new(HexId(1), 0, vec![]).unwrap());

        let mut out = Vec::new();
        seq.write(&mut out).unwrap();
        assert_eq!(out, data);
        assert_eq!(seq.serialized_length(), 16);
    }

    #[test]
    fn padding_is_discarded() {
        let mut data = vec![
            0xEF, 0xBE, 0xAD, 0xDE, 0, 0, 0, 0, // id
            0x05, 0x00, // flag
            0x01, 0x00, // count
            0xAA, 0xBB, 0xCC, 0xDD, // padding
        ];
        data.extend_from_slice(&[0x10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x32, 0, 0, 0, 0xFE, 0xFF, 0, 0, 0, 0]);

        let seq: Sequence = Cursor::new(&data).read_le().unwrap();
        assert_eq!(seq.id, HexId(0xdead_beef));
        assert_eq!(seq.flag, 5);
        assert_eq!(seq.entries, vec![entry(0x10, 0x32)]);

        let mut out = Vec::new();
        seq.write(&mut out).unwrap();
        assert_eq!(&out[12..16], &[0, 0, 0, 0]);
        assert_eq!(&out[..12], &data[..12]);
        assert_eq!(&out[16..], &data[16..]);
        assert_eq!(out.len(), seq.serialized_length());
    }

    #[test]
    fn count_comes_from_entries() {
        let seq = Sequence::new(HexId(2), 0, vec![entry(1, 1), entry(2, 2), entry(3, 3)]).unwrap();

        let mut out = Vec::new();
        seq.write(&mut out).unwrap();
        assert_eq!(&out[10..12], &[3, 0]);
        assert_eq!(out.len(), 16 + 3 * 20);
    }

    #[test]
    fn missing_entry_is_an_error() {
        let data: [u8; 16] = [
            0x01, 0, 0, 0, 0, 0, 0, 0,
            0x00, 0x00,
            0x01, 0x00, // claims one entry, none follow
            0x00, 0x00, 0x00, 0x00,
        ];
        let res: binread::BinResult<Sequence> = Cursor::new(data).read_le();
        assert!(res.is_err());
    }

    #[test]
    fn too_many_entries() {
        let err = Sequence::new(HexId(7), 0, vec![entry(0, 0); 0x10000]).unwrap_err();
        match err {
            FormatError::TooManyEntries { id, count } => {
                assert_eq!(id, HexId(7));
                assert_eq!(count, 0x10000);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
