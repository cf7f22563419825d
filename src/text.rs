//! YAML form of a [`Container`], for editing by hand.
//!
//! Ids are written as zero-padded hex strings (`'0x0000abcd'`), everything else
//! as plain decimal integers.

use crate::common::HexId;
use crate::error::FormatError;
use crate::sqb::Container;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt;

impl Serialize for HexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct HexIdVisitor;

impl<'de> Visitor<'de> for HexIdVisitor {
    type Value = HexId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 64-bit id, either an integer or a string like \"0x0000abcd\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<HexId, E> {
        Ok(HexId(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<HexId, E> {
        u64::try_from(v)
            .map(HexId)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<HexId, E> {
        let trimmed = v.trim();
        let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => trimmed.parse(),
        };

        parsed
            .map(HexId)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for HexId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HexIdVisitor)
    }
}

pub fn to_yaml(container: &Container) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(container)?)
}

/// Parses a document and checks it can be written back out.
pub fn from_yaml(text: &str) -> Result<Container, FormatError> {
    let container: Container = serde_yaml::from_str(text)?;
    container
        .validate()
        .map_err(|err| FormatError::InvalidTextDocument(err.to_string()))?;
    Ok(container)
}
