//! Command-line argument parsing for the session replayer

use clap::Parser;
use std::path::PathBuf;

/// Replay a scripted editing session against a single text field
#[derive(Parser, Debug)]
#[command(name = "linefield", version, about = "Single-line text field session replayer")]
pub struct CliArgs {
    /// Session script (YAML)
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Measure text with this TTF/OTF font instead of fixed-width cells
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Font size in pixels (used with --font)
    #[arg(long, value_name = "PX", default_value_t = 16.0)]
    pub font_size: f32,

    /// Field config file (defaults to ~/.config/linefield/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keymap overrides (defaults to ~/.config/linefield/keymap.yaml)
    #[arg(long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Use the system clipboard instead of an in-memory one
    #[arg(long)]
    pub system_clipboard: bool,
}
