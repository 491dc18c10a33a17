mod format;
mod input;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use pgp_crc24::Checksum;
use tracing::level_filters::LevelFilter;

use crate::format::{parse_expected, OutputFormat};
use crate::input::Input;
use crate::logging::setup_logging;

#[derive(Debug, clap::Parser)]
#[clap(
    name = "crc24",
    about = "Compute and verify OpenPGP (RFC 4880) CRC-24 checksums.",
    version
)]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace). Falls back to RUST_LOG, then WARN.
    #[clap(long, global = true, env = "CRC24_LOG_LEVEL")]
    log_level: Option<LevelFilter>,

    /// Additionally write a JSON log to this file.
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,

    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, clap::Subcommand)]
enum Subcommand {
    /// Print the checksum of each input
    Sum {
        /// Output format of the checksums.
        #[clap(long, value_enum, default_value = "hex", env = "CRC24_FORMAT")]
        format: OutputFormat,

        /// Files to checksum. Reads stdin if none are given or for '-'.
        files: Vec<PathBuf>,
    },
    /// Verify the checksum of an input against an expected value
    Check {
        /// Expected checksum, as hex ('21CF02', '0x21cf02') or as an armor checksum line ('=Ic8C').
        #[clap(long)]
        expect: String,

        /// File to check. Reads stdin if omitted or '-'.
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = setup_logging(cli.log_file.as_deref(), cli.log_level)
        .context("Failed to set up logging")?;

    let mut stdout = io::stdout().lock();

    match cli.subcommand {
        Subcommand::Sum { format, files } => sum(&inputs_from_args(files), format, &mut stdout),
        Subcommand::Check { expect, file } => {
            let expected = parse_expected(&expect)?;
            let input = file.map_or(Input::Stdin, Input::from_arg);
            check(&input, expected, &mut stdout)
        }
    }
}

fn inputs_from_args(files: Vec<PathBuf>) -> Vec<Input> {
    if files.is_empty() {
        return vec![Input::Stdin];
    }

    files.into_iter().map(Input::from_arg).collect()
}

fn sum(inputs: &[Input], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    for input in inputs {
        let checksum = input.checksum()?;
        writeln!(out, "{}  {input}", format.render(checksum))?;
    }

    Ok(())
}

fn check(input: &Input, expected: Checksum, out: &mut impl Write) -> Result<()> {
    let actual = input.checksum()?;

    if actual != expected {
        tracing::warn!(%input, %expected, %actual, "Checksum mismatch");
        bail!("Checksum mismatch for {input}: expected {expected}, computed {actual}");
    }

    writeln!(out, "{input}: OK")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }

    #[test]
    fn settings_fall_back_to_environment() {
        use clap::CommandFactory;
        use std::ffi::OsStr;

        let command = Cli::command();
        let env_of = |command: &clap::Command, id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id().as_str() == id)
                .and_then(|arg| arg.get_env().map(OsStr::to_os_string))
        };

        assert_eq!(
            env_of(&command, "log_level"),
            Some("CRC24_LOG_LEVEL".into())
        );

        let sum = command.find_subcommand("sum").unwrap();
        assert_eq!(env_of(sum, "format"), Some("CRC24_FORMAT".into()));
    }

    #[test]
    fn parses_log_level() {
        let cli = Cli::parse_from(["crc24", "--log-level", "debug", "sum"]);
        assert_eq!(cli.log_level, Some(LevelFilter::DEBUG));

        let cli = Cli::parse_from(["crc24", "sum", "--log-level", "OFF"]);
        assert_eq!(cli.log_level, Some(LevelFilter::OFF));
    }

    #[test]
    fn parses_sum_arguments() {
        let cli = Cli::parse_from(["crc24", "sum", "--format", "armor", "a.asc", "-"]);

        let Subcommand::Sum { format, files } = cli.subcommand else {
            panic!("expected the sum subcommand");
        };
        assert_eq!(format, OutputFormat::Armor);
        assert_eq!(
            inputs_from_args(files),
            vec![Input::File("a.asc".into()), Input::Stdin]
        );
    }

    #[test]
    fn no_files_means_stdin() {
        assert_eq!(inputs_from_args(Vec::new()), vec![Input::Stdin]);
    }

    #[test]
    fn sum_prints_one_line_per_input() {
        let first = temp_file(b"123456789");
        let second = temp_file(b"");
        let inputs = [
            Input::File(first.path().to_owned()),
            Input::File(second.path().to_owned()),
        ];

        let mut out = Vec::new();
        sum(&inputs, OutputFormat::Hex, &mut out).unwrap();

        let expected = format!(
            "21CF02  {}\nB704CE  {}\n",
            first.path().display(),
            second.path().display()
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn check_accepts_matching_checksum() {
        let file = temp_file(b"123456789");
        let input = Input::File(file.path().to_owned());

        let mut out = Vec::new();
        check(&input, Checksum::of(b"123456789"), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}: OK\n", file.path().display())
        );
    }

    #[test]
    fn check_rejects_mismatch() {
        let file = temp_file(b"123456789");
        let input = Input::File(file.path().to_owned());
        let expected = parse_expected("=twTO").unwrap();

        let mut out = Vec::new();
        let error = check(&input, expected, &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(
            error.to_string().contains("expected B704CE, computed 21CF02"),
            "{error:#}"
        );
    }
}
