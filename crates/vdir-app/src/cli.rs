use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use vdir_rfc::VdirResult;
use vdir_rfc::rfc::ical::Calendar;
use vdir_rfc::rfc::json::{from_json_with, to_json};
use vdir_rfc::rfc::vcard::Card;
use vdir_rfc::rfc::vdir::EncoderOptions;

/// Converts vCard and iCalendar data to and from JSON
#[derive(Debug, Parser)]
#[command(name = "vdir")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "vCard / iCalendar JSON converter", long_about = None)]
pub struct Cli {
    /// Sets a custom config file
    ///
    /// If not specified, 'vdir.toml' in the current working directory is
    /// used when present.
    #[arg(short, long, env = "VDIR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reads a vCard or iCalendar object and prints it as JSON
    ToJson(ConvertArgs),
    /// Reads JSON and prints it as a vCard or iCalendar object
    FromJson(ConvertArgs),
}

#[derive(Debug, clap::Args)]
pub struct ConvertArgs {
    /// Kind of object being converted
    #[arg(short, long, value_enum)]
    pub kind: Kind,

    /// Input file; standard input when omitted
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Card,
    Calendar,
}

impl Command {
    fn args(&self) -> &ConvertArgs {
        match self {
            Self::ToJson(args) | Self::FromJson(args) => args,
        }
    }

    /// Converts `input` according to the subcommand.
    ///
    /// ## Errors
    /// Returns the decode, mapping, encode or JSON error of the conversion.
    pub fn convert(&self, input: &str, options: EncoderOptions) -> VdirResult<String> {
        match (self, self.args().kind) {
            (Self::ToJson(_), Kind::Card) => to_json::<Card>(input),
            (Self::ToJson(_), Kind::Calendar) => to_json::<Calendar>(input),
            (Self::FromJson(_), Kind::Card) => from_json_with::<Card>(input, options),
            (Self::FromJson(_), Kind::Calendar) => from_json_with::<Calendar>(input, options),
        }
    }

    /// Reads the input file, or standard input.
    ///
    /// ## Errors
    /// Returns an error if the input cannot be read.
    pub fn read_input(&self) -> anyhow::Result<String> {
        match &self.args().file {
            Some(path) => read_file(path),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read standard input")?;
                Ok(input)
            }
        }
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_to_json_with_file() {
        let cli = Cli::try_parse_from(["vdir", "to-json", "--kind", "card", "contact.vcf"]).unwrap();
        let Command::ToJson(args) = &cli.command else {
            panic!("expected to-json");
        };
        assert_eq!(args.kind, Kind::Card);
        assert_eq!(args.file.as_deref(), Some(Path::new("contact.vcf")));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_from_json_from_stdin() {
        let cli =
            Cli::try_parse_from(["vdir", "-c", "custom.toml", "from-json", "-k", "calendar"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(Path::new("custom.toml")));
        assert!(matches!(
            cli.command,
            Command::FromJson(ConvertArgs {
                kind: Kind::Calendar,
                file: None
            })
        ));
    }

    #[test]
    fn kind_is_required() {
        assert!(Cli::try_parse_from(["vdir", "to-json"]).is_err());
    }

    #[test_log::test]
    fn convert_both_directions() {
        let to_json = Command::ToJson(ConvertArgs {
            kind: Kind::Card,
            file: None,
        });
        let json = to_json
            .convert("BEGIN:VCARD\r\nFN:John Doe\r\nEND:VCARD\r\n", EncoderOptions::default())
            .unwrap();
        assert!(json.contains("\"formatted_name\":\"John Doe\""));

        let from_json = Command::FromJson(ConvertArgs {
            kind: Kind::Card,
            file: None,
        });
        let text = from_json.convert(&json, EncoderOptions::default()).unwrap();
        assert_eq!(text, "BEGIN:VCARD\r\nFN:John Doe\r\nEND:VCARD\r\n");
    }

    #[test]
    fn missing_file_is_reported() {
        let command = Command::ToJson(ConvertArgs {
            kind: Kind::Calendar,
            file: Some(PathBuf::from("/nonexistent/calendar.ics")),
        });
        let err = command.read_input().unwrap_err();
        assert!(err.to_string().contains("calendar.ics"));
    }
}
