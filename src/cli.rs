use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::i18n::Language;
use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(
    name = "namewheel",
    version,
    about = "Spin a wheel of names and let it pick one for you"
)]
pub struct Cli {
    /// Keep everything in memory; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Use this config file instead of ~/.config/namewheel/config.yaml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive wheel (default)
    Dashboard,

    /// List all options with their state
    #[command(visible_alias = "ls")]
    List,

    /// Add an option (trimmed, at most 30 characters, 40 options max)
    Add {
        /// Option text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete an option permanently
    #[command(visible_alias = "rm")]
    Remove {
        /// Position as shown by `list` (starting at 1)
        index: usize,
    },

    /// Enable or disable an option
    Toggle {
        /// Position as shown by `list` (starting at 1)
        index: usize,
    },

    /// Enable every hidden option
    Reactivate,

    /// Spin the wheel once and print the winner
    Spin {
        /// Take the winner off the wheel afterwards
        #[arg(long)]
        hide: bool,

        /// Seed the random offset for a reproducible spin
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Export the wheel as SVG
    Svg {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Set or toggle the UI language
    Lang {
        /// Language to switch to; toggles when omitted
        language: Option<Language>,
    },

    /// Set or toggle the theme
    Theme {
        /// Theme to switch to; toggles when omitted
        theme: Option<Theme>,
    },

    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}
