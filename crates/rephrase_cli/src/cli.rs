//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Rewrite the latest conversational turn into a retrieval-ready query
#[derive(Parser)]
#[command(name = "rephrase", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug logs, including prompt/result traces)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rephrase a user input against a conversation (calls the model)
    Run {
        #[command(flatten)]
        input: InputArgs,
        /// Model identifier. Uses REPHRASE_MODEL if not set.
        #[arg(long)]
        model: Option<String>,
        /// Print the prompt and the raw model reply
        #[arg(long)]
        show_prompt: bool,
    },
    /// Print the prompt that `run` would send, without calling the model
    Prompt {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show which history turns fit the token budget
    Window {
        #[command(flatten)]
        history: HistoryArgs,
        /// Count tokens with the ~4 chars/token estimate instead of cl100k BPE
        #[arg(long)]
        estimate: bool,
    },
    /// Inspect or change rephraser settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Clone)]
pub struct InputArgs {
    /// The latest user message
    #[arg(short, long)]
    pub input: String,
    /// Extra instructions embedded as <PROMPT>
    #[arg(short, long, conflicts_with = "system_prompt_file")]
    pub system_prompt: Option<String>,
    /// Read the system prompt from a file
    #[arg(long)]
    pub system_prompt_file: Option<PathBuf>,
    /// rephrase | rephrase-and-chunks (default; also used for unknown names)
    #[arg(short, long)]
    pub mode: Option<String>,
    #[command(flatten)]
    pub history: HistoryArgs,
}

#[derive(Args, Clone)]
pub struct HistoryArgs {
    /// JSON array of {"role", "content"} turns; "-" reads stdin
    #[arg(long)]
    pub history: Option<PathBuf>,
    /// Trailing turns considered. Uses REPHRASE_MAX_TURNS if not set.
    #[arg(long)]
    pub max_turns: Option<usize>,
    /// Token budget for the history block. Uses REPHRASE_MAX_HISTORY_TOKENS if not set.
    #[arg(long)]
    pub max_history_tokens: Option<usize>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Persist a setting to ~/.rephrase/env
    Set {
        /// model, mode, max-turns, max-history-tokens, api-key or base-url
        key: String,
        value: String,
    },
}
