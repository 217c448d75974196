//! Block values stored on simulated disks and their canonical text form.
//!
//! Text tokens:
//! * data: one character, or two uppercase hex digits;
//! * parity: `P(HH)` and `Q(HH)`;
//! * failed placeholder: `X`;
//! * padding: `_`.

#[cfg(test)]
mod block_tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{RaidError, Result};

const FAILED_TOKEN: &str = "X";
const PADDING_TOKEN: &str = "_";

/// Glyph selects how a data byte is rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// The byte as a single character.
    Char,
    /// The byte as two uppercase hex digits.
    Hex,
}

/// Block is one cell of a disk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Block {
    Data { byte: u8, glyph: Glyph },
    ParityP(u8),
    ParityQ(u8),
    Failed,
    Padding,
}

impl Block {
    /// `data` wraps an input symbol.
    ///
    /// Bytes whose character would read back as a placeholder token (`X`, `_`)
    /// are rendered in hex instead.
    #[must_use]
    pub const fn data(byte: u8) -> Self {
        let glyph = if byte == b'X' || byte == b'_' {
            Glyph::Hex
        } else {
            Glyph::Char
        };
        Self::Data { byte, glyph }
    }

    /// `recovered` wraps a rebuilt data byte; rebuilt bytes always render in hex.
    #[must_use]
    pub const fn recovered(byte: u8) -> Self {
        Self::Data {
            byte,
            glyph: Glyph::Hex,
        }
    }

    /// `data_byte` returns the payload of a data block.
    #[must_use]
    pub const fn data_byte(&self) -> Option<u8> {
        match self {
            Self::Data { byte, .. } => Some(*byte),
            _ => None,
        }
    }

    /// `value` returns the stored byte of a data or parity block.
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        match self {
            Self::Data { byte, .. } | Self::ParityP(byte) | Self::ParityQ(byte) => Some(*byte),
            Self::Failed | Self::Padding => None,
        }
    }

    /// `xor_term` is this block's contribution to an XOR parity sum.
    #[must_use]
    pub const fn xor_term(&self) -> u8 {
        match self {
            Self::Data { byte, .. } => *byte,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    #[must_use]
    pub const fn is_padding(&self) -> bool {
        matches!(self, Self::Padding)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    #[must_use]
    pub const fn is_parity(&self) -> bool {
        matches!(self, Self::ParityP(_) | Self::ParityQ(_))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data {
                byte,
                glyph: Glyph::Char,
            } => write!(f, "{}", char::from(*byte)),
            Self::Data {
                byte,
                glyph: Glyph::Hex,
            } => write!(f, "{byte:02X}"),
            Self::ParityP(p) => write!(f, "P({p:02X})"),
            Self::ParityQ(q) => write!(f, "Q({q:02X})"),
            Self::Failed => f.write_str(FAILED_TOKEN),
            Self::Padding => f.write_str(PADDING_TOKEN),
        }
    }
}

fn parse_hex_byte(digits: &str, token: &str) -> Result<u8> {
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RaidError::Document(format!(
            "bad hex byte in block {token:?}"
        )));
    }
    u8::from_str_radix(digits, 16)
        .map_err(|e| RaidError::Document(format!("bad hex byte in block {token:?}: {e}")))
}

fn parse_tagged(token: &str, tag: char) -> Option<&str> {
    token
        .strip_prefix(tag)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
}

impl FromStr for Block {
    type Err = RaidError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            FAILED_TOKEN => return Ok(Self::Failed),
            PADDING_TOKEN => return Ok(Self::Padding),
            _ => {}
        }

        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            let byte = u8::try_from(u32::from(c)).map_err(|_| {
                RaidError::Document(format!("data character {c:?} is wider than a byte"))
            })?;
            return Ok(Self::Data {
                byte,
                glyph: Glyph::Char,
            });
        }

        if let Some(digits) = parse_tagged(token, 'P') {
            return parse_hex_byte(digits, token).map(Self::ParityP);
        }
        if let Some(digits) = parse_tagged(token, 'Q') {
            return parse_hex_byte(digits, token).map(Self::ParityQ);
        }
        if token.len() == 2 {
            return parse_hex_byte(token, token).map(Self::recovered);
        }

        Err(RaidError::Document(format!("unrecognized block {token:?}")))
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
