// src/config.rs
use crate::constants::PARALLEL_DECODE_THRESHOLD;
use crate::model::ContextKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Knobs for a single decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Entry count at which materialization moves onto the rayon pool.
    pub parallel_threshold: usize,
}

impl DecodeOptions {
    /// Never leave the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    pub fn should_parallelize(&self, entries: usize) -> bool {
        entries > 1 && entries >= self.parallel_threshold
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_DECODE_THRESHOLD,
        }
    }
}

/// Which object the input properties were taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContextArg {
    /// A database's `properties` (the schema)
    Database,
    /// A page's `properties` (the values)
    Page,
}

impl From<ContextArg> for ContextKind {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Database => ContextKind::Database,
            ContextArg::Page => ContextKind::Page,
        }
    }
}

/// What to print after a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// One line per property: name, tag, variant and a short preview
    #[default]
    Summary,
    /// The decoded map encoded back to JSON
    Json,
    /// The decoded model in Rust debug form
    Debug,
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// JSON file holding a properties object (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Object the properties were taken from
    #[arg(short, long, value_enum, default_value_t = ContextArg::Page)]
    pub context: ContextArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Summary)]
    pub output: OutputMode,

    /// Indent JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Decode every entry on the calling thread
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration for one inspection run.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub input: Option<PathBuf>,
    pub context: ContextKind,
    pub output: OutputMode,
    pub pretty: bool,
    pub verbose: bool,
    pub decode: DecodeOptions,
}

impl InspectConfig {
    pub fn resolve(cli: CommandLineInput) -> Self {
        let decode = if cli.sequential {
            DecodeOptions::sequential()
        } else {
            DecodeOptions::default()
        };

        InspectConfig {
            input: cli.input,
            context: cli.context.into(),
            output: cli.output,
            pretty: cli.pretty,
            verbose: cli.verbose,
            decode,
        }
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            input: None,
            context: ContextKind::Page,
            output: OutputMode::Summary,
            pretty: false,
            verbose: false,
            decode: DecodeOptions::default(),
        }
    }
}
