use crate::config::ValidationConfig;
use crate::domain::year_month::YearMonth;
use crate::utils::text::{between, UNTIL_END};
use crate::validators::{validate_plate, validate_renavam, validate_state_code, RenavamFormat};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "smartec")]
#[command(about = "Validate Brazilian identifiers and calendar months")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print the result as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a state code (UF)
    Uf { value: String },
    /// Validate a vehicle plate
    Plate { value: String },
    /// Validate a Renavam
    Renavam {
        value: String,
        #[arg(long, help = "Left-pad the output with zeros to 11 digits")]
        zero_pad: bool,
    },
    /// Parse a YYYY-MM month
    Month { value: String },
    /// Extract the text between two delimiters
    Between {
        text: String,
        #[arg(long)]
        first: String,
        #[arg(long, help = "Closing delimiter, defaults to the end of the text")]
        last: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub valid: bool,
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<i64>,
}

impl Outcome {
    fn from_value(value: Option<String>) -> Self {
        Self {
            valid: value.is_some(),
            value,
            ticks: None,
        }
    }
}

impl Command {
    pub fn run(&self, config: &ValidationConfig) -> Outcome {
        match self {
            Command::Uf { value } => Outcome::from_value(validate_state_code(value)),
            Command::Plate { value } => Outcome::from_value(validate_plate(value)),
            Command::Renavam { value, zero_pad } => {
                let format = if *zero_pad {
                    RenavamFormat::ZeroPadded
                } else {
                    config.renavam_format()
                };
                Outcome::from_value(validate_renavam(value, format))
            }
            Command::Month { value } => match value.parse::<YearMonth>() {
                Ok(month) => Outcome {
                    valid: true,
                    value: Some(month.to_string()),
                    ticks: Some(month.to_ticks()),
                },
                Err(e) => {
                    tracing::debug!("Month rejected: {}", e);
                    Outcome::from_value(None)
                }
            },
            Command::Between { text, first, last } => {
                let last = last.as_deref().unwrap_or(UNTIL_END);
                let found = between(text, first, Some(last));
                Outcome::from_value((!found.is_empty()).then(|| found.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("smartec").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_uf_command() {
        let cli = parse(&["uf", " sp "]);
        let outcome = cli.command.run(&ValidationConfig::default());
        assert!(outcome.valid);
        assert_eq!(outcome.value.as_deref(), Some("SP"));
    }

    #[test]
    fn test_renavam_zero_pad_from_flag_or_config() {
        let cli = parse(&["renavam", "639884962", "--zero-pad"]);
        let outcome = cli.command.run(&ValidationConfig::default());
        assert_eq!(outcome.value.as_deref(), Some("00639884962"));

        let cli = parse(&["renavam", "639884962"]);
        let mut config = ValidationConfig::default();
        assert_eq!(
            cli.command.run(&config).value.as_deref(),
            Some("639884962")
        );
        config.renavam.zero_pad = true;
        assert_eq!(
            cli.command.run(&config).value.as_deref(),
            Some("00639884962")
        );
    }

    #[test]
    fn test_month_command() {
        let cli = parse(&["--json", "month", "1970-01"]);
        assert!(cli.json);
        let outcome = cli.command.run(&ValidationConfig::default());
        assert_eq!(outcome.ticks, Some(0));
        assert_eq!(outcome.value.as_deref(), Some("1970-01-01 00:00:00"));

        let cli = parse(&["month", "2024-13"]);
        assert!(!cli.command.run(&ValidationConfig::default()).valid);
    }

    #[test]
    fn test_between_command_defaults_to_end() {
        let cli = parse(&["between", "key=value", "--first", "key="]);
        let outcome = cli.command.run(&ValidationConfig::default());
        assert_eq!(outcome.value.as_deref(), Some("value"));
    }

    #[test]
    fn test_outcome_json() {
        let outcome = Outcome::from_value(None);
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"valid":false,"value":null}"#
        );
    }
}
