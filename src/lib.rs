//! Compact, sortable three-character datetags.
//!
//! A datetag encodes a UTC timestamp as three base-54 digits: the year since
//! 2024, the ISO-aligned week of that year and the 52nd of the week ("tick").
//! Tags of the same week share their first two characters, and tags sort in
//! time order when compared digit by digit.
//!
//! ```
//! let tag = datetag::encode(1_727_270_589).unwrap();
//! assert_eq!(tag.to_string(), "aQu");
//! ```

mod base54;
mod components;
mod consts;
mod prelude;
mod resolver;
mod table;
mod tag;

pub use base54::{Alphabet, BASE54};
pub use components::{Component, TagComponents};
pub use consts::*;
pub use resolver::{BoundaryTable, Resolved};
pub use table::{BOUNDARY_TABLE, Boundary, RawBoundary};
pub use tag::{Suffix, Tag, TagError};

use crate::prelude::*;
use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// A three-character tag: year digit, week digit, tick digit.
/// Every byte is a symbol of [`BASE54`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Datetag([u8; TAG_LEN]);

/// Error type for encoding a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The timestamp lies outside every year covered by the boundary table.
    #[error("Timestamp {0} is outside the supported range")]
    OutOfRange(i64),

    /// A computed component does not fit in one digit.
    #[error("The {component} component {value} does not fit in a single digit")]
    ComponentOverflow { component: Component, value: u32 },

    /// The destination is too small for the digits produced.
    #[error("Destination holds {available} bytes but {required} are required")]
    EncodingCapacity { required: usize, available: usize },

    /// The alphabet has fewer than two symbols.
    #[error("Alphabet of {0} symbols cannot encode digits")]
    DegenerateBase(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TagParseError {
    #[display(fmt = "Invalid tag length: {} (must be {})", "_0", TAG_LEN)]
    InvalidLength(usize),
    #[display(fmt = "Invalid tag symbol: {_0:?}")]
    InvalidSymbol(char),
    #[display(fmt = "Empty tag string")]
    EmptyInput,
}

impl std::error::Error for TagParseError {}

/// Encodes a UTC Unix timestamp using the embedded boundary table.
///
/// # Errors
/// Returns `EncodeError::OutOfRange` for timestamps outside 2024 through 2075
/// and `EncodeError::ComponentOverflow` if a component exceeds one digit.
pub fn encode(timestamp: i64) -> Result<Datetag, EncodeError> {
    encode_with(&BoundaryTable::embedded(), timestamp)
}

/// Encodes a timestamp against a caller-supplied boundary table.
///
/// # Errors
/// Same as [`encode`].
pub fn encode_with(table: &BoundaryTable<'_>, timestamp: i64) -> Result<Datetag, EncodeError> {
    let resolved = table
        .resolve(timestamp)
        .ok_or(EncodeError::OutOfRange(timestamp))?;
    Datetag::from_components(TagComponents::compute(&resolved, timestamp))
}

/// Writes the tag for `timestamp` into the first three bytes of `buf`.
///
/// # Errors
/// Returns `EncodeError::EncodingCapacity` if `buf` is shorter than
/// [`TAG_LEN`], otherwise the same errors as [`encode`].
pub fn encode_into(timestamp: i64, buf: &mut [u8]) -> Result<(), EncodeError> {
    if buf.len() < TAG_LEN {
        return Err(EncodeError::EncodingCapacity {
            required:  TAG_LEN,
            available: buf.len(),
        });
    }
    let tag = encode(timestamp)?;
    buf[..TAG_LEN].copy_from_slice(tag.as_bytes());
    Ok(())
}

/// Current time in Unix seconds, negative before 1970.
pub(crate) fn unix_now() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |secs| -secs),
    }
}

impl Datetag {
    /// Builds a tag from three components, one digit each.
    ///
    /// # Errors
    /// Returns `EncodeError::ComponentOverflow` if any component is 54 or more.
    pub fn from_components(components: TagComponents) -> Result<Self, EncodeError> {
        let mut bytes = [0u8; TAG_LEN];
        for (slot, (component, value)) in bytes.iter_mut().zip(components.iter()) {
            if BASE54.digit(value).is_none() {
                return Err(EncodeError::ComponentOverflow { component, value });
            }
            BASE54.encode_into(value, std::slice::from_mut(slot))?;
        }
        Ok(Self(bytes))
    }

    /// Tag for the current system time.
    ///
    /// # Errors
    /// Returns `EncodeError::OutOfRange` if the clock is outside the table.
    pub fn now() -> Result<Self, EncodeError> {
        encode(unix_now())
    }

    pub const fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// The digit values of the three positions. This reads the tag, it does
    /// not recover a timestamp.
    pub fn components(&self) -> TagComponents {
        // bytes are validated on construction
        let [year, week, tick] = self.0.map(|b| BASE54.index_of(b).unwrap_or_default());
        TagComponents { year, week, tick }
    }

    /// Years since 2024
    pub fn year(&self) -> u32 {
        self.components().year
    }

    /// Week number, 0 when the year starts inside the previous ISO year's last week
    pub fn week(&self) -> u32 {
        self.components().week
    }

    /// 52nd of the week, 0..=51
    pub fn tick(&self) -> u32 {
        self.components().tick
    }
}

impl fmt::Display for Datetag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&b| f.write_char(char::from(b)))
    }
}

impl FromStr for Datetag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TagParseError::EmptyInput);
        }

        let count = trimmed.chars().count();
        if count != TAG_LEN {
            return Err(TagParseError::InvalidLength(count));
        }

        let mut bytes = [0u8; TAG_LEN];
        for (slot, c) in bytes.iter_mut().zip(trimmed.chars()) {
            *slot = u8::try_from(c)
                .ok()
                .filter(|&b| BASE54.index_of(b).is_some())
                .ok_or(TagParseError::InvalidSymbol(c))?;
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<TagComponents> for Datetag {
    type Error = EncodeError;

    fn try_from(value: TagComponents) -> Result<Self, Self::Error> {
        Self::from_components(value)
    }
}

impl PartialOrd for Datetag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Datetag {
    /// Orders by digit value, which is chronological order. Byte order would
    /// put digits and capitals before lowercase letters.
    fn cmp(&self, other: &Self) -> Ordering {
        self.components().cmp(&other.components())
    }
}

impl serde::Serialize for Datetag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Datetag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
