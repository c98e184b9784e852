//! CLI command definitions and handlers

mod export;
mod init;
mod questions;
mod results;
mod retake;
mod run;
mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Readyscope - AR/VR developer readiness assessment
///
/// 100% LOCAL - No account needed. No data leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "readyscope")]
#[command(
    version,
    about = "Terminal readiness assessment for aspiring AR/VR developers - WISCAR-based scoring with narrative feedback",
    long_about = "Readyscope walks you through a fifteen-question assessment (psychometric fit, \
technical knowledge, and the WISCAR readiness framework) and computes a weighted \
readiness score with insights, next steps, and a skill-gap table.\n\n\
100% LOCAL - No account needed. No data leaves your machine.\n\n\
Run without a subcommand to take the assessment interactively:\n  \
readyscope",
    after_help = "\
Examples:
  readyscope                            Take the assessment interactively
  readyscope score answers.json         Score a prepared answer file
  readyscope results --format markdown  Re-render your last result
  readyscope export                     Download-style JSON report
  readyscope questions --category tech  List the technical questions
  readyscope retake                     Clear the saved result"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take the assessment interactively (default when no subcommand is given)
    Run,

    /// Score a JSON answer file without the interactive flow
    #[command(after_help = "\
Examples:
  readyscope score answers.json                      Score and print the text report
  readyscope score answers.json --format json        Machine-readable result
  readyscope score answers.json -o report.md -f md   Write a Markdown report
  readyscope score answers.json --explain            Show the full scoring breakdown

The answer file is a JSON array of objects:
  [{\"questionId\": \"psych_1\", \"value\": 4, \"timestamp\": \"2026-08-25T12:00:00Z\"}, ...]")]
    Score {
        /// Path to the JSON answer file
        input: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Explain the scoring formula with the unrounded breakdown
        #[arg(long)]
        explain: bool,
    },

    /// Show the most recent saved assessment result
    Results {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Write the downloadable JSON report for the last saved result
    Export {
        /// Output file path
        #[arg(long, short = 'o', default_value = "ar-vr-assessment-results.json")]
        output: PathBuf,
    },

    /// List the question catalog
    #[command(after_help = "\
Examples:
  readyscope questions                               List all fifteen questions
  readyscope questions --category wiscar             Only the WISCAR section
  readyscope questions --format json                 JSON output for scripting")]
    Questions {
        /// Filter by category: psychometric, technical, wiscar
        #[arg(long, value_parser = ["psychometric", "psych", "technical", "tech", "wiscar"])]
        category: Option<String>,

        /// Output format (table, json)
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },

    /// Clear the saved result so the assessment can be retaken fresh
    Retake,

    /// Write an example readyscope.toml with the scoring tables
    Init,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Commands::Run) => run::run(),

        Some(Commands::Score {
            input,
            format,
            output,
            explain,
        }) => score::run(&input, &format, output.as_deref(), explain),

        Some(Commands::Results { format, output }) => results::run(&format, output.as_deref()),

        Some(Commands::Export { output }) => export::run(&output),

        Some(Commands::Questions { category, format }) => {
            questions::run(category.as_deref(), &format)
        }

        Some(Commands::Retake) => retake::run(),

        Some(Commands::Init) => init::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_command_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_run() {
        let cli = Cli::try_parse_from(["readyscope"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_score_args() {
        let cli =
            Cli::try_parse_from(["readyscope", "score", "answers.json", "-f", "json"]).unwrap();
        match cli.command {
            Some(Commands::Score { input, format, explain, .. }) => {
                assert_eq!(input, PathBuf::from("answers.json"));
                assert_eq!(format, "json");
                assert!(!explain);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Cli::try_parse_from(["readyscope", "score", "a.json", "-f", "sarif"]).is_err());
    }
}
