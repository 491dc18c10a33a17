use std::io;

use crcxx::crc32::{catalog::CRC_24_OPENPGP, Crc, LookupTable256};

use crate::crc24::CRC24_INIT;
use crate::Checksum;

// CRC-24/OpenPGP is unreflected with a zero xorout, so a finished value can be
// fed back in as the initial value of the next chunk.
static CRC24: Crc<'static, LookupTable256> = Crc::<LookupTable256>::new(&CRC_24_OPENPGP);

/// Incremental CRC-24 digest.
///
/// Feeding a message in any number of slices produces the same value as
/// [`crc24`](crate::crc24) over the whole message. The digest also implements
/// [`io::Write`], so a reader can be streamed into it with [`io::copy`]:
///
/// ```
/// use pgp_crc24::Crc24;
///
/// let mut digest = Crc24::new();
/// std::io::copy(&mut &b"123456789"[..], &mut digest).unwrap();
/// assert_eq!(digest.value(), 0x21CF02);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc24 {
    crc: u32,
}

impl Crc24 {
    /// Create a digest holding the initial register value.
    pub const fn new() -> Self {
        Self { crc: CRC24_INIT }
    }

    /// Feed `data` into the digest.
    pub fn update(&mut self, data: &[u8]) {
        self.crc = CRC24.compute_with_initial(self.crc, data);
    }

    /// The checksum of everything fed so far.
    pub const fn value(&self) -> u32 {
        self.crc
    }

    /// Consume the digest and return its checksum.
    pub fn finalize(self) -> Checksum {
        Checksum::from_masked(self.crc)
    }

    /// Start over as if nothing had been fed.
    pub fn reset(&mut self) {
        self.crc = CRC24_INIT;
    }
}

impl Default for Crc24 {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Crc24 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
