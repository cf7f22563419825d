use binread::io::{Read, Seek, SeekFrom};
use binread::{BinRead, BinResult, ReadOptions};

/// A table of 32-bit offsets, followed by the records they point to.
///
/// Reads `count` offsets (taken from the read options, like `Vec`), then treats
/// the position right after the table as the base every offset is relative to.
/// Records are read in table order, which doesn't have to match the order they
/// are laid out in: offsets may go backwards, leave gaps, or point at the same
/// record twice.
///
/// ```text
/// #[br(count = header.sequence_count)]
/// table: OffsetTable<Sequence>,
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetTable<T> {
    /// Offsets as stored, relative to `base`.
    pub offsets: Vec<u32>,
    /// Absolute position of the first byte after the table.
    pub base: u64,
    /// One record per offset, in table order.
    pub entries: Vec<T>,
}

impl<Arg: Copy + 'static, BR: BinRead<Args = Arg>> BinRead for OffsetTable<BR> {
    type Args = Arg;

    fn read_options<R: Read + Seek>(reader: &mut R, ro: &ReadOptions, args: Self::Args) -> BinResult<Self> {
        let count = ro.count.unwrap_or(0);

        let mut table_options = *ro;
        table_options.count = Some(count);
        let offsets: Vec<u32> = Vec::read_options(reader, &table_options, ())?;
        let base = reader.seek(SeekFrom::Current(0))?;

        // the count was meant for the table, not for the records
        let mut record_options = *ro;
        record_options.count = None;

        let mut entries = Vec::with_capacity(offsets.len());
        for &offset in &offsets {
            reader.seek(SeekFrom::Start(base + u64::from(offset)))?;
            let mut record = BR::read_options(reader, &record_options, args)?;
            record.after_parse(reader, &record_options, args)?;
            entries.push(record);
        }

        Ok(OffsetTable { offsets, base, entries })
    }
}

impl<T> OffsetTable<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute position of each record in the source.
    pub fn positions(&self) -> impl Iterator<Item = u64> + '_ {
        let base = self.base;
        self.offsets.iter().map(move |&offset| base + u64::from(offset))
    }

    pub fn into_inner(self) -> Vec<T> {
        self.entries
    }
}
