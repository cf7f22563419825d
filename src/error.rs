use crate::common::HexId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("bad magic: expected \"SQB\\0\", found {found:02X?}")]
    BadMagic { found: [u8; 4] },

    #[error("unexpected end of file")]
    UnexpectedEof,

    #[error("too many sequences: {0} (max 65535)")]
    TooManySequences(usize),

    #[error("too many entries in sequence {id}: {count} (max 65535)")]
    TooManyEntries { id: HexId, count: usize },

    #[error("invalid text document: {0}")]
    InvalidTextDocument(String),

    #[error("unrecognized file type: {}", .0.display())]
    UnknownExtension(PathBuf),

    // anything binread reports that isn't covered above
    #[error("malformed container: {0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<binread::Error> for FormatError {
    fn from(err: binread::Error) -> Self {
        match err {
            binread::Error::BadMagic { found, .. } => FormatError::BadMagic {
                found: found.downcast_ref::<[u8; 4]>().copied().unwrap_or_default(),
            },
            binread::Error::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                FormatError::UnexpectedEof
            }
            binread::Error::Io(err) => FormatError::Io(err),
            other => FormatError::Malformed(other.to_string()),
        }
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError::InvalidTextDocument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_maps_to_unexpected_eof() {
        let err: FormatError = binread::Error::Io(io::ErrorKind::UnexpectedEof.into()).into();
        assert!(matches!(err, FormatError::UnexpectedEof));
    }

    #[test]
    fn bad_magic_keeps_found_bytes() {
        let err: FormatError = binread::Error::BadMagic {
            pos: 0,
            found: Box::new(*b"RSAR"),
        }
        .into();

        match err {
            FormatError::BadMagic { found } => assert_eq!(&found, b"RSAR"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn display_messages() {
        assert_eq!(FormatError::UnexpectedEof.to_string(), "unexpected end of file");
        assert_eq!(
            FormatError::TooManySequences(70000).to_string(),
            "too many sequences: 70000 (max 65535)"
        );
        assert_eq!(
            FormatError::TooManyEntries { id: HexId(0xabcd), count: 65536 }.to_string(),
            "too many entries in sequence 0x0000abcd: 65536 (max 65535)"
        );
    }
}
