//! CLI argument definitions for the `notepack` binary.

use std::path::PathBuf;

use clap::Parser;

/// notepack - convert a MIDI instrument track to a DEFW word table
#[derive(Parser, Debug)]
#[command(name = "notepack")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Path to the input MIDI file
    pub input: PathBuf,

    /// Index of the instrument to encode
    #[arg(short, long, default_value_t = 0)]
    pub instrument: usize,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Add a comment with note name and length to each line
    #[arg(long)]
    pub annotate: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
