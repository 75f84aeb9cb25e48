//! CLI command definitions

use clap::Parser;
use docqa_domain::{Locale, OutputFormat};
use std::path::PathBuf;

/// CLI arguments for docqa
#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(author, version, about = "Ask questions about your documents")]
#[command(long_about = r#"
docqa uploads a document to a question-answering backend and asks questions
about it. Answers are printed together with the source passages they cite.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. DOCQA_* environment variables (e.g. DOCQA_BACKEND__BASE_URL)
3. ./docqa.toml        Project-level config
4. ~/.config/docqa/config.toml   Global config

Example:
  docqa --upload handbook.pdf "How many vacation days do I get?"
  docqa --session 3f2a9c "What about sick leave?"
  docqa --chat --locale ja
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Upload this document before asking
    #[arg(short, long, value_name = "PATH")]
    pub upload: Option<PathBuf>,

    /// Reuse a session from an earlier upload
    #[arg(short, long, value_name = "ID")]
    pub session: Option<String>,

    /// Backend API root (default: http://127.0.0.1:8000/api/)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Locale for chat messages: ko, ja or en
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<Locale>,

    /// Output format for one-shot answers: text or json
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append a JSONL transcript of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
