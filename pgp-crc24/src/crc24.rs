/// Initial value of the CRC-24 register (RFC 4880 §6.1).
pub const CRC24_INIT: u32 = 0xB7_04CE;

/// Generator polynomial of CRC-24/OpenPGP, including the x^24 term.
pub const CRC24_POLY: u32 = 0x186_4CFB;

/// Mask selecting the 24 checksum bits of the register.
pub const CRC24_MASK: u32 = 0xFF_FFFF;

/// Bit that is shifted out of the 24-bit register.
const CRC24_CARRY: u32 = 0x100_0000;

/// Compute the CRC-24 of `octets`.
///
/// The result occupies the low 24 bits; the upper 8 bits are always zero.
/// An empty input yields [`CRC24_INIT`].
pub const fn crc24(octets: &[u8]) -> u32 {
    let mut crc = CRC24_INIT;
    let mut i = 0;
    while i < octets.len() {
        crc ^= (octets[i] as u32) << 16;
        let mut bit = 0;
        while bit < 8 {
            crc <<= 1;
            if crc & CRC24_CARRY != 0 {
                crc ^= CRC24_POLY;
            }
            bit += 1;
        }
        i += 1;
    }
    crc & CRC24_MASK
}
