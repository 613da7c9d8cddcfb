//! CLI command definitions

use airwatch_domain::DayOfWeek;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for airwatch
#[derive(Parser, Debug)]
#[command(name = "airwatch")]
#[command(author, version, about = "Air-quality station agent")]
#[command(long_about = r#"
airwatch polls an air-quality station, aggregates the last hour of readings
and lets a tool-using reasoning model write the report.

Configuration files are loaded from (in priority order):
1. AIRWATCH_* environment variables (e.g. AIRWATCH_REASONING__MODEL)
2. --config <path>       Explicit config file
3. ./airwatch.toml       Project-level config
4. ~/.config/airwatch/config.toml   Global config

Credentials fall back to GROQ_API_KEY, TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID.

Example:
  airwatch check
  airwatch ask "Is PM2.5 higher than usual for a Monday afternoon?"
  airwatch report --json
  airwatch events --hour 14 --day monday
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep saved events in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Show the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Scheduled run: agent report, notification and evaluation log
    Check {
        /// Request sent to the agent (defaults to the general station report)
        request: Option<String>,

        /// Print the report instead of sending it to Telegram
        #[arg(long)]
        no_notify: bool,
    },

    /// Ask the agent a question, print the answer and append it to the evaluation log
    Ask {
        /// The question for the agent
        question: String,

        /// Offer only read-only tools (no event is saved)
        #[arg(long)]
        read_only: bool,
    },

    /// Aggregate the current window without the agent
    Report {
        /// Print the pipeline outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show saved events and baselines for one hour slot
    Events {
        /// Hour of day in station local time
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: u32,

        /// Day of week (e.g. Monday, mon)
        #[arg(long)]
        day: DayOfWeek,

        /// Restrict the baseline to one sensor
        #[arg(long)]
        sensor: Option<String>,
    },

    /// Show the most recent evaluation log records
    Logs {
        /// Number of records
        #[arg(long, default_value_t = 10)]
        last: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::try_parse_from(["airwatch", "check"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Check {
                request: None,
                no_notify: false
            })
        );
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_events() {
        let cli =
            Cli::try_parse_from(["airwatch", "-vv", "events", "--hour", "14", "--day", "mon"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Command::Events {
                hour: 14,
                day: DayOfWeek::Monday,
                sensor: None
            })
        );
    }

    #[test]
    fn test_events_rejects_bad_hour_and_day() {
        assert!(
            Cli::try_parse_from(["airwatch", "events", "--hour", "24", "--day", "Monday"]).is_err()
        );
        assert!(
            Cli::try_parse_from(["airwatch", "events", "--hour", "3", "--day", "Funday"]).is_err()
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "airwatch",
            "ask",
            "--read-only",
            "How is PM10?",
            "--no-persist",
        ])
        .unwrap();
        assert!(cli.no_persist);
        assert_eq!(
            cli.command,
            Some(Command::Ask {
                question: "How is PM10?".to_string(),
                read_only: true
            })
        );
    }

    #[test]
    fn test_logs_default_count() {
        let cli = Cli::try_parse_from(["airwatch", "logs"]).unwrap();
        assert_eq!(cli.command, Some(Command::Logs { last: 10 }));
    }
}
