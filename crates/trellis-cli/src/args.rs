//! Command-line argument definitions for the Trellis CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select which diagrams to render, where to write
//! them, which configuration file to use and how verbose logging is.

use clap::Parser;

/// Command-line arguments for the Trellis diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagrams to render, by name (all when omitted)
    #[arg(value_name = "DIAGRAM")]
    pub diagrams: Vec<String>,

    /// Directory the SVG files are written to
    #[arg(short, long, default_value = "docs/diagrams")]
    pub out_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the available diagrams and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
