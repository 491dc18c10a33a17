//! CRC-24 for OpenPGP
//!
//! RFC 4880 §6.1 protects the body of an ASCII-armored block with a 24-bit
//! CRC, transmitted on its own line after the base64 data. This crate computes
//! that checksum.
//!
//! ```
//! use pgp_crc24::{crc24, Checksum, Crc24};
//!
//! assert_eq!(crc24(b"123456789"), 0x21CF02);
//!
//! let mut digest = Crc24::new();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), Checksum::of(b"123456789"));
//! ```
//!
//! [`crc24`] is the bit-by-bit reference form of the algorithm. [`Crc24`] is a
//! table-driven digest for data that arrives in pieces, and [`Checksum`] is the
//! resulting 24-bit value with its byte and text representations.
#![warn(missing_docs)]

mod checksum;
mod crc24;
mod digest;

pub use checksum::{Checksum, ParseChecksumError};
pub use crc24::{crc24, CRC24_INIT, CRC24_MASK, CRC24_POLY};
pub use digest::Crc24;
