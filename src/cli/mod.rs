//! CLI interface for Warpspec

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Map control positions to synthesis parameter values
#[derive(Parser)]
#[command(name = "warpspec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map a control value in [0, 1] to a parameter value
    Map {
        /// Spec name (built-in or from the config file)
        spec: String,

        /// Control value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Configuration file with custom specs
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Map a parameter value back to a control value in [0, 1]
    Unmap {
        /// Spec name (built-in or from the config file)
        spec: String,

        /// Parameter value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Configuration file with custom specs
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print evenly spaced control values and their mapped values
    Table {
        /// Spec name (built-in or from the config file)
        spec: String,

        /// Number of intervals between 0 and 1
        #[arg(short, long, default_value = "10")]
        steps: usize,

        /// Configuration file with custom specs
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List available specs
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Configuration file with custom specs
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Convert a single value between units
    Convert {
        /// Conversion to apply
        #[arg(value_enum)]
        conversion: Conversion,

        /// Input value
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "warpspec.yaml")]
        config: PathBuf,
    },

    /// Print an example configuration file
    Init,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Conversion {
    DbToAmp,
    AmpToDb,
    MidiToFreq,
    FreqToMidi,
}
