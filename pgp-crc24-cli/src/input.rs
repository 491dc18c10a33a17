use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pgp_crc24::{Checksum, Crc24};

/// A source of bytes to checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` selects stdin, anything else is a path.
    pub fn from_arg(arg: PathBuf) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg)
        }
    }

    pub fn checksum(&self) -> Result<Checksum> {
        let _span = tracing::debug_span!("checksum", input = %self).entered();

        let (checksum, length) = match self {
            Self::Stdin => checksum_reader(io::stdin().lock()).context("Failed to read stdin")?,
            Self::File(path) => checksum_file(path)?,
        };

        tracing::debug!(length, %checksum, "Checksummed input");

        Ok(checksum)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn checksum_file(path: &Path) -> Result<(Checksum, u64)> {
    let file =
        File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;

    checksum_reader(file).with_context(|| format!("Failed to read '{}'", path.display()))
}

/// Stream `reader` to its end through a digest, returning the checksum and the byte count.
pub fn checksum_reader(mut reader: impl Read) -> io::Result<(Checksum, u64)> {
    let mut digest = Crc24::new();
    let length = io::copy(&mut reader, &mut digest)?;
    Ok((digest.finalize(), length))
}
