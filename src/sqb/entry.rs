use crate::common::{ConstBinLength, HexId};
use binread::BinRead;
use binwrite::BinWrite;
use serde::{Deserialize, Serialize};

/// One weighted entry of a [`Sequence`](super::Sequence). Fixed 20 bytes on disk.
///
/// Apart from `id`, none of these fields have a confirmed meaning. `probability`
/// is a guess based on the values seen; nothing here interprets any of them.
#[derive(BinRead, BinWrite, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[br(little)]
#[binwrite(little)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub id: HexId,
    pub field_a: u16,
    pub probability: u16,
    pub field_c: i16,
    pub field_d: i16,
    pub field_e: u32, // padding?
}

impl ConstBinLength for Entry {
    const LENGTH: usize = 20;
}
