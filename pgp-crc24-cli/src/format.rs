use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use pgp_crc24::Checksum;

/// How checksums are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Six upper case hex digits, e.g. `21CF02`.
    #[default]
    Hex,
    /// The checksum as a decimal integer.
    Decimal,
    /// The armor checksum line: `=` and the base64 of the three checksum bytes.
    Armor,
}

impl OutputFormat {
    pub fn render(self, checksum: Checksum) -> String {
        match self {
            Self::Hex => checksum.to_string(),
            Self::Decimal => checksum.value().to_string(),
            Self::Armor => format!("={}", STANDARD.encode(checksum.to_be_bytes())),
        }
    }
}

/// Parse an expected checksum given either as hex or as an armor checksum line.
pub fn parse_expected(text: &str) -> Result<Checksum> {
    let text = text.trim();

    let Some(encoded) = text.strip_prefix('=') else {
        return text
            .parse()
            .with_context(|| format!("'{text}' is not a hex checksum"));
    };

    let bytes = STANDARD
        .decode(encoded)
        .with_context(|| format!("'{text}' is not a base64 armor checksum"))?;

    match <[u8; 3]>::try_from(bytes.as_slice()) {
        Ok(bytes) => Ok(Checksum::from_be_bytes(bytes)),
        Err(_) => bail!(
            "Armor checksum '{text}' decodes to {} bytes, expected 3",
            bytes.len()
        ),
    }
}
