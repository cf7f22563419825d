//! Converting whole files, picking the direction from the file extension.

use crate::error::FormatError;
use crate::sqb::Container;
use crate::text;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const BINARY_EXTENSION: &str = "sqb";
pub const TEXT_EXTENSION: &str = "yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `.sqb` -> `.yml`
    Decode,
    /// `.yml`/`.yaml` -> `.sqb`
    Encode,
}

impl Direction {
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(BINARY_EXTENSION) => Ok(Direction::Decode),
            Some(TEXT_EXTENSION) | Some("yaml") => Ok(Direction::Encode),
            _ => Err(FormatError::UnknownExtension(path.to_path_buf())),
        }
    }

    /// Where the result goes by default: next to the input, extension swapped.
    pub fn output_path(self, input: &Path) -> PathBuf {
        match self {
            Direction::Decode => input.with_extension(TEXT_EXTENSION),
            Direction::Encode => input.with_extension(BINARY_EXTENSION),
        }
    }

    pub fn convert(self, input: &[u8]) -> Result<Vec<u8>, FormatError> {
        match self {
            Direction::Decode => {
                let container = Container::from_bytes(input)?;
                Ok(text::to_yaml(&container)?.into_bytes())
            }
            Direction::Encode => {
                let input = std::str::from_utf8(input)
                    .map_err(|err| FormatError::InvalidTextDocument(err.to_string()))?;
                let container = text::from_yaml(input)?;
                container.to_bytes()
            }
        }
    }
}

/// Converts `input` and writes the result to `output`, or next to `input` if
/// there isn't one. Returns the path written.
///
/// Nothing is written unless the conversion succeeded.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<PathBuf, FormatError> {
    let direction = Direction::from_path(input)?;
    let output = output.map_or_else(|| direction.output_path(input), Path::to_path_buf);

    match direction {
        Direction::Decode => info!("dumping {}...", input.display()),
        Direction::Encode => info!("creating {}...", output.display()),
    }

    let bytes = fs::read(input)?;
    let converted = direction.convert(&bytes)?;
    fs::write(&output, converted)?;

    info!("wrote {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_extension() {
        assert_eq!(Direction::from_path(Path::new("table.sqb")).unwrap(), Direction::Decode);
        assert_eq!(Direction::from_path(Path::new("dir/table.yml")).unwrap(), Direction::Encode);
        assert_eq!(Direction::from_path(Path::new("table.yaml")).unwrap(), Direction::Encode);

        for bad in &["table.bin", "table", "table.SQB", "sqb"] {
            match Direction::from_path(Path::new(bad)) {
                Err(FormatError::UnknownExtension(path)) => assert_eq!(path, Path::new(bad)),
                other => panic!("{} gave {:?}", bad, other),
            }
        }
    }

    #[test]
    fn output_next_to_input() {
        assert_eq!(Direction::Decode.output_path(Path::new("a/b.sqb")), Path::new("a/b.yml"));
        assert_eq!(Direction::Encode.output_path(Path::new("a/b.yml")), Path::new("a/b.sqb"));
        assert_eq!(Direction::Encode.output_path(Path::new("a/b.yaml")), Path::new("a/b.sqb"));
    }

    #[test]
    fn convert_both_ways() {
        let container = Container::new(vec![]).unwrap();
        let binary = container.to_bytes().unwrap();

        let yaml = Direction::Decode.convert(&binary).unwrap();
        assert_eq!(Direction::Encode.convert(&yaml).unwrap(), binary);
    }

    #[test]
    fn decode_error_surfaces() {
        assert!(matches!(Direction::Decode.convert(b"SQB"), Err(FormatError::UnexpectedEof)));
        assert!(matches!(Direction::Encode.convert(b"sequences: nope"), Err(FormatError::InvalidTextDocument(_))));
    }
}
