use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "projboard")]
#[command(version, about = "An in-memory board of active and finished projects")]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML file with validation rules and log filter
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive board session reading commands from stdin (default)
    Shell,

    /// Run board commands from a file, then print the board
    ///
    /// Per-command output is discarded unless --echo is given; errors still
    /// go to stderr.
    Run {
        /// File with one board command per line
        script: PathBuf,

        /// Print the final board as JSON
        #[arg(long)]
        json: bool,

        /// Print each command's output as the script runs
        #[arg(long, conflicts_with = "json")]
        echo: bool,

        /// Stop at the first failing command
        #[arg(long)]
        strict: bool,
    },

    /// Check form input against the validation rules without adding anything
    Check {
        /// Project title
        #[arg(long)]
        title: String,

        /// Project description
        #[arg(long)]
        description: String,

        /// Number of people assigned
        #[arg(long, allow_hyphen_values = true)]
        people: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
