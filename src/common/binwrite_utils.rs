use binwrite::{BinWrite, WriterOption};
use std::convert::TryFrom;
use std::io::{self, Result, Write};

/// Number of bytes a value takes up once written.
pub trait BinLength {
    fn serialized_length(&self) -> usize;
}

/// [`BinLength`] for fixed-size records.
pub trait ConstBinLength {
    const LENGTH: usize;
}

macro_rules! const_bin_length {
    ($($ty:ty),*) => {
        $(
            impl ConstBinLength for $ty {
                const LENGTH: usize = std::mem::size_of::<$ty>();
            }
        )*
    }
}

const_bin_length!(u8, i8, u16, i16, u32, i32, u64, i64);

impl<T: ConstBinLength> BinLength for T {
    fn serialized_length(&self) -> usize {
        Self::LENGTH
    }
}

impl<T: BinLength> BinLength for [T] {
    fn serialized_length(&self) -> usize {
        self.iter().map(BinLength::serialized_length).sum()
    }
}

impl<T: BinLength> BinLength for Vec<T> {
    fn serialized_length(&self) -> usize {
        self.as_slice().serialized_length()
    }
}

/// Records queued up to be written back-to-back.
///
/// Pushing a record hands back where it will start relative to the start of the
/// pool, so a table of offsets can be written out before the records themselves.
#[derive(BinWrite)]
pub struct Pool<'a, T: BinWrite + BinLength> {
    contents: Vec<&'a T>,
    #[binwrite(ignore)]
    cur_len: usize,
}

impl<'a, T: BinWrite + BinLength> Pool<'a, T> {
    pub fn new() -> Pool<'a, T> {
        Pool {
            contents: Vec::new(),
            cur_len: 0,
        }
    }

    /// Returns offset from start of pool
    pub fn push(&mut self, item: &'a T) -> usize {
        let tmp = self.cur_len;
        self.cur_len += item.serialized_length();
        self.contents.push(item);
        tmp
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl<'a, T: BinWrite + BinLength> Default for Pool<'a, T> {
    fn default() -> Self {
        Pool::new()
    }
}

impl<'a, T: BinWrite + BinLength> BinLength for Pool<'a, T> {
    fn serialized_length(&self) -> usize {
        self.cur_len
    }
}

/// Length of the `u16` count and `u32` padding written by [`write_counted`].
pub const COUNTED_PREFIX_LENGTH: usize = 6;

/// Writes a list as a `u16` count, four bytes of zero padding, then the items.
///
/// For use with `#[binwrite(with(write_counted))]`.
pub fn write_counted<W, T>(items: &Vec<T>, writer: &mut W, options: &WriterOption) -> Result<()>
where
    W: Write,
    T: BinWrite,
{
    let count = u16::try_from(items.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} items don't fit in a u16 count", items.len()),
        )
    })?;

    (count, 0u32).write_options(writer, options)?;
    items.write_options(writer, options)
}
