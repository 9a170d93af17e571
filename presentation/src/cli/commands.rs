//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for solve and evaluate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for answer-router
#[derive(Parser, Debug)]
#[command(name = "answer-router")]
#[command(author, version, about = "Route benchmark questions to prompting strategies and answer them")]
#[command(long_about = r#"
answer-router labels each question with a classifier call, picks a prompting
strategy for the label, and returns one plain-text answer.

Math questions are solved with chain-of-thought; long ones take a majority
vote over several samples. Every extraction failure falls back to a direct
answer, so a string is always produced.

Configuration files are loaded from (in priority order):
1. ANSWER_ROUTER_* environment variables
2. --config <path>            Explicit config file
3. ./answer-router.toml       Project-level config
4. ~/.config/answer-router/config.toml   Global config

The endpoint falls back to $API_BASE, $OPENAI_API_KEY and $MODEL_NAME.

Example:
  answer-router solve "What is 2+2?"
  answer-router generate --input test_data.json --output answers.json
  answer-router evaluate --input dev_data.json --limit 50
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

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append every model exchange to this JSONL file
    #[arg(long, global = true, value_name = "PATH")]
    pub exchange_log: Option<PathBuf>,

    /// Also write diagnostics to a daily-rotated file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a single question
    Solve {
        /// The question text
        question: String,

        /// Print the classifier label and route along with the answer
        #[arg(long)]
        explain: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Answer every question in a file, resuming from existing answers
    Generate {
        /// Questions file (JSON list of {"input": ...})
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Answers file (JSON list of {"output": ...}); saved after every question
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Measure exact-match accuracy on a dev set with gold outputs
    Evaluate {
        /// Dev questions file with "output" gold answers
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Evaluate only the first N questions
        #[arg(short, long, default_value_t = 200)]
        limit: usize,

        /// Evaluate the whole file
        #[arg(long, conflicts_with = "limit")]
        all: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one question and its current answer
    Inspect {
        #[arg(long, value_name = "FILE")]
        questions: PathBuf,

        #[arg(long, value_name = "FILE")]
        answers: PathBuf,

        /// 0-based question index
        #[arg(long)]
        index: usize,
    },

    /// Show random completed answers next to their questions
    Sample {
        #[arg(long, value_name = "FILE")]
        questions: PathBuf,

        #[arg(long, value_name = "FILE")]
        answers: PathBuf,

        /// Number of samples
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve_with_global_flags() {
        let cli = Cli::try_parse_from(["answer-router", "-vv", "solve", "What is 2+2?", "--explain"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Solve {
                question,
                explain,
                output,
            }) => {
                assert_eq!(question, "What is 2+2?");
                assert!(explain);
                assert_eq!(output, OutputFormat::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_limit_defaults_to_200() {
        let cli = Cli::try_parse_from(["answer-router", "evaluate", "--input", "dev.json"]).unwrap();
        match cli.command {
            Some(Command::Evaluate { limit, all, .. }) => {
                assert_eq!(limit, 200);
                assert!(!all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_sample_count_flag() {
        let cli = Cli::try_parse_from([
            "answer-router",
            "sample",
            "--questions",
            "q.json",
            "--answers",
            "a.json",
            "-n",
            "3",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Command::Sample { count: 3, .. })));
    }

    #[test]
    fn test_generate_requires_paths() {
        assert!(Cli::try_parse_from(["answer-router", "generate", "--input", "q.json"]).is_err());
    }
}
