use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{BASE54, Datetag, EncodeError, SUFFIX_MAX, SUFFIX_SEPARATOR, TagParseError, prelude::*};

/// A datetag followed by a random suffix, e.g. `aQu-TWr`.
/// The suffix tells apart tags created within the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{datetag}-{suffix}")]
pub struct Tag {
    datetag: Datetag,
    suffix:  Suffix,
}

/// A random value in `0..=SUFFIX_MAX`, written most significant digit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct Suffix(u32);

/// Error type for tag operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// The timestamp could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Error parsing the datetag part.
    #[error(transparent)]
    Parse(#[from] TagParseError),

    /// Suffix value larger than `SUFFIX_MAX`.
    #[error("Suffix value {0} exceeds {SUFFIX_MAX}")]
    SuffixOutOfRange(u32),

    /// Invalid tag format.
    #[error("Invalid tag format: {0}")]
    InvalidFormat(String),
}

impl Suffix {
    /// # Errors
    /// Returns `TagError::SuffixOutOfRange` if `value` exceeds `SUFFIX_MAX`.
    pub fn new(value: u32) -> Result<Self, TagError> {
        if value > SUFFIX_MAX {
            return Err(TagError::SuffixOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Draws a suffix uniformly from `0..=SUFFIX_MAX`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(0..=SUFFIX_MAX))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = BASE54.encode_msb_first(self.0).map_err(|_| fmt::Error)?;
        f.write_str(&digits)
    }
}

impl FromStr for Suffix {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BASE54
            .decode_msb_first(s)
            .ok_or_else(|| TagError::InvalidFormat(format!("Invalid suffix: {s}")))?;
        Self::new(value)
    }
}

impl Tag {
    pub const fn new(datetag: Datetag, suffix: Suffix) -> Self {
        Self { datetag, suffix }
    }

    /// Tags `timestamp` with a suffix from the thread-local generator.
    ///
    /// # Errors
    /// Returns `TagError::Encode` if the timestamp cannot be encoded.
    pub fn generate(timestamp: i64) -> Result<Self, TagError> {
        Self::generate_with_rng(timestamp, &mut rand::rng())
    }

    /// Tags `timestamp` with a suffix drawn from `rng`.
    ///
    /// # Errors
    /// Returns `TagError::Encode` if the timestamp cannot be encoded.
    pub fn generate_with_rng<R: Rng>(timestamp: i64, rng: &mut R) -> Result<Self, TagError> {
        let datetag = crate::encode(timestamp)?;
        Ok(Self::new(datetag, Suffix::random(rng)))
    }

    /// Tags the current system time.
    ///
    /// # Errors
    /// Returns `TagError::Encode` if the clock is outside the supported range.
    pub fn now() -> Result<Self, TagError> {
        Self::generate(crate::unix_now())
    }

    pub const fn datetag(&self) -> Datetag {
        self.datetag
    }

    pub const fn suffix(&self) -> Suffix {
        self.suffix
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (datetag, suffix) = trimmed.split_once(SUFFIX_SEPARATOR).ok_or_else(|| {
            TagError::InvalidFormat(format!(
                "No suffix separator found (expected '{SUFFIX_SEPARATOR}'): {s}"
            ))
        })?;
        Ok(Self::new(datetag.parse()?, suffix.parse()?))
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
