use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trierank")]
#[command(about = "trierank - Sort words by a custom alphabet and autocomplete weighted terms.")]
#[command(version = trierank::VERSION)]
pub struct Cli {
    /// Path to one or more config files (merged in order). Built-in defaults
    /// are used when none are given.
    #[arg(long, action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },

    /// Sort words by a custom alphabet. The first input line is the alphabet,
    /// every line after it is a word. Words with symbols outside the alphabet
    /// are dropped.
    Sort {
        /// Read from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Load a weighted dictionary and print the top matches for every prefix
    /// read from stdin.
    Complete {
        /// Dictionary file: entry count on the first line, then one
        /// 'weight<TAB>term' line per entry.
        dict: PathBuf,

        /// Number of matches per prefix. Defaults to `complete.top_k`.
        k: Option<usize>,

        /// Print one JSON object per match.
        #[arg(long)]
        json: bool,
    },
}
