//! Twelve-byte, time-ordered document identifiers.
//!
//! Layout (big-endian):
//!
//! ```text
//! | 4 bytes: unix seconds | 5 bytes: process random | 3 bytes: counter |
//! ```
//!
//! The textual form is 24 lowercase hex characters. Parsing accepts either
//! case but nothing else.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of raw bytes in an [`ObjectId`].
pub const OBJECT_ID_LEN: usize = 12;

/// Number of hex characters in the textual form.
pub const OBJECT_ID_HEX_LEN: usize = OBJECT_ID_LEN * 2;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseObjectIdError {
    #[error("expected {OBJECT_ID_HEX_LEN} hex characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex character {c:?} at position {index}")]
    InvalidCharacter { c: char, index: usize },
}

/// A globally unique identifier assigned once at creation time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; OBJECT_ID_LEN]);

impl ObjectId {
    /// Generate a fresh identifier stamped with the current time.
    pub fn new() -> Self {
        let secs = Utc::now().timestamp().clamp(0, u32::MAX as i64) as u32;
        Self::from_parts(secs, *process_unique(), next_count())
    }

    /// Build an identifier from its raw bytes.
    pub const fn from_bytes(bytes: [u8; OBJECT_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> [u8; OBJECT_ID_LEN] {
        self.0
    }

    /// Parse the 24-character hex form.
    pub fn parse_str(s: &str) -> Result<Self, ParseObjectIdError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != OBJECT_ID_HEX_LEN {
            return Err(ParseObjectIdError::InvalidLength(chars.len()));
        }

        let mut bytes = [0u8; OBJECT_ID_LEN];
        for (i, pair) in chars.chunks(2).enumerate() {
            let hi = hex_value(pair[0], i * 2)?;
            let lo = hex_value(pair[1], i * 2 + 1)?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// The creation time embedded in the identifier (second precision).
    pub fn timestamp(&self) -> DateTime<Utc> {
        let secs = u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]]);
        DateTime::from_timestamp(i64::from(secs), 0).unwrap_or_default()
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(OBJECT_ID_HEX_LEN);
        for byte in self.0 {
            out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
        }
        out
    }

    fn from_parts(secs: u32, unique: [u8; 5], count: u32) -> Self {
        let mut bytes = [0u8; OBJECT_ID_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&unique);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn hex_value(c: char, index: usize) -> Result<u8, ParseObjectIdError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ParseObjectIdError::InvalidCharacter { c, index })
}

fn process_unique() -> &'static [u8; 5] {
    PROCESS_UNIQUE.get_or_init(rand::random::<[u8; 5]>)
}

fn next_count() -> u32 {
    let counter = COUNTER.get_or_init(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK));
    counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_str(&s).map_err(serde::de::Error::custom)
    }
}
