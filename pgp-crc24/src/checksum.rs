use std::fmt;
use std::str::FromStr;

use crate::crc24::{crc24, CRC24_MASK};

/// A 24-bit CRC-24 value.
///
/// The value is guaranteed to fit in 24 bits. In an armored block the checksum
/// is carried as three big-endian bytes, see [`Checksum::to_be_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checksum(u32);

/// Error returned when a [`Checksum`] cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseChecksumError {
    /// The input contains no hex digits.
    #[error("Checksum is empty")]
    Empty,
    /// The input contains a character that is not a hex digit.
    #[error("Invalid hex digit {0:?} in checksum")]
    InvalidDigit(char),
    /// The value needs more than 24 bits.
    #[error("Checksum does not fit in 24 bits")]
    OutOfRange,
}

impl Checksum {
    /// The checksum of `data`.
    pub const fn of(data: &[u8]) -> Self {
        Self(crc24(data))
    }

    /// Wrap `value`, or `None` if it does not fit in 24 bits.
    pub const fn new(value: u32) -> Option<Self> {
        if value & !CRC24_MASK == 0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub(crate) const fn from_masked(value: u32) -> Self {
        Self(value & CRC24_MASK)
    }

    /// The checksum as an integer in `0..=0xFFFFFF`.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The three bytes of the checksum, most significant first.
    pub const fn to_be_bytes(self) -> [u8; 3] {
        let [_, high, mid, low] = self.0.to_be_bytes();
        [high, mid, low]
    }

    /// Build a checksum from three bytes, most significant first.
    pub const fn from_be_bytes(bytes: [u8; 3]) -> Self {
        let [high, mid, low] = bytes;
        Self(u32::from_be_bytes([0, high, mid, low]))
    }
}

impl From<Checksum> for u32 {
    fn from(checksum: Checksum) -> Self {
        checksum.0
    }
}

impl TryFrom<u32> for Checksum {
    type Error = ParseChecksumError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseChecksumError::OutOfRange)
    }
}

impl FromStr for Checksum {
    type Err = ParseChecksumError;

    /// Parse hex digits, optionally prefixed with `0x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.is_empty() {
            return Err(ParseChecksumError::Empty);
        }

        let mut value: u32 = 0;
        for c in digits.chars() {
            let digit = c
                .to_digit(16)
                .ok_or(ParseChecksumError::InvalidDigit(c))?;
            value = (value << 4) | digit;
            if value > CRC24_MASK {
                return Err(ParseChecksumError::OutOfRange);
            }
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

impl fmt::UpperHex for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

impl fmt::LowerHex for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}
