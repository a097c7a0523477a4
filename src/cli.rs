use crate::core::ShipgateError;
use crate::formatting::ColorMode;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shipgate")]
#[command(about = "Production-readiness classification and Go/No-Go decisions for app audits", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an audit document and produce a readiness verdict
    Evaluate {
        /// Audit document (JSON) with phase outcomes and critical issues
        input: PathBuf,

        /// Configuration file (defaults to the nearest .shipgate.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reference date for deployment planning, YYYY-MM-DD (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Estimated test coverage of the app, 0-100
        #[arg(long = "test-coverage")]
        test_coverage: Option<f64>,

        /// Measured concurrent-user capacity, overrides anything in the findings
        #[arg(long = "capacity")]
        capacity: Option<u32>,

        /// Classify sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Exit with status 2 when the recommendation is NO_GO or MAJOR_REDESIGN_REQUIRED
        #[arg(long = "fail-on-no-go")]
        fail_on_no_go: bool,

        /// Disable colors
        #[arg(long)]
        plain: bool,

        /// Color output: auto, always or never (overrides NO_COLOR/CLICOLOR)
        #[arg(long, env = "SHIPGATE_COLOR", value_parser = parse_color)]
        color: Option<ColorMode>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default .shipgate.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, ShipgateError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| ShipgateError::cli("date", format!("expected YYYY-MM-DD: {e}")))
}

fn parse_color(s: &str) -> Result<ColorMode, ShipgateError> {
    ColorMode::parse(s).ok_or_else(|| {
        ShipgateError::cli("color", format!("expected auto, always or never, got {s:?}"))
    })
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Evaluate { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

/// Parse the process arguments without letting clap exit the process.
pub fn parse_args() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Markdown),
            crate::io::output::OutputFormat::Markdown
        );
    }

    #[test]
    fn test_cli_parsing_evaluate_command() {
        let args = vec![
            "shipgate",
            "evaluate",
            "audit.json",
            "--format",
            "json",
            "--date",
            "2025-04-01",
            "--capacity",
            "180",
            "--fail-on-no-go",
            "-vv",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Evaluate {
                ref input,
                format,
                date,
                capacity,
                fail_on_no_go,
                verbosity,
                ..
            } => {
                assert_eq!(input, &PathBuf::from("audit.json"));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 1));
                assert_eq!(capacity, Some(180));
                assert!(fail_on_no_go);
                assert_eq!(verbosity, 2);
            }
            _ => panic!("Expected Evaluate command"),
        }
        assert_eq!(cli.command.verbosity(), 2);
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let result = Cli::try_parse_from(["shipgate", "evaluate", "a.json", "--date", "04/01/2025"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_color_mode() {
        let cli = Cli::parse_from(["shipgate", "evaluate", "a.json", "--color", "Always"]);
        match cli.command {
            Commands::Evaluate { color, .. } => assert_eq!(color, Some(ColorMode::Always)),
            _ => panic!("Expected Evaluate command"),
        }
        let bad = Cli::try_parse_from(["shipgate", "evaluate", "a.json", "--color", "rainbow"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["shipgate", "init", "--force"]);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
