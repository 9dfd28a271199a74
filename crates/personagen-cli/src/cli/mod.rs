//! CLI definition for the `personagen` binary.
//!
//! A single command: read a Reddit profile URL, build a persona, write it to
//! `user_persona_<username>.txt`. Every flag is optional.

pub mod progress;
pub mod run;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use personagen_types::config::AppConfig;

/// Generate a user persona from a Reddit account's posts and comments.
#[derive(Parser, Debug)]
#[command(name = "personagen", version, about, long_about = None)]
pub struct Cli {
    /// Reddit profile URL (prompted for when omitted).
    pub url: Option<String>,

    /// Maximum posts and, separately, maximum comments to fetch.
    #[arg(long, env = "PERSONAGEN_LIMIT")]
    pub limit: Option<NonZeroUsize>,

    /// Directory the persona file is written to.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Chat model used for generation.
    #[arg(long)]
    pub model: Option<String>,

    /// Config file (defaults to PERSONAGEN_CONFIG, then ./personagen.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON after the persona is saved.
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed logs (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Export tracing spans as OpenTelemetry to stdout.
    #[arg(long)]
    pub otel: bool,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(limit) = self.limit {
            config.fetch.limit = limit;
        }
        if let Some(ref dir) = self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(ref model) = self.model {
            config.generation.model = model.clone();
        }
    }
}
