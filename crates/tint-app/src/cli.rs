use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tint: perceptual OKLCh palette generator.
#[derive(Parser, Debug)]
#[command(name = "tint", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. `debug`, `tint=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Palette data file override.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a ramp generated from a base color.
    Generate(GenerateArgs),

    /// Show a color in OKLCh and sRGB.
    Convert {
        /// Hex color, `#` optional.
        hex: String,
    },

    /// WCAG contrast ratio between two colors.
    Contrast {
        first: String,
        second: String,
    },

    /// Hue name of a color.
    Name {
        hex: String,
    },

    /// Manage stored palettes.
    #[command(subcommand)]
    Palette(PaletteCommand),

    /// Write all stored palettes as a Figma variable collection.
    Export {
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Read a Figma variable collection into the store.
    Import {
        file: PathBuf,

        /// Replace stored palettes instead of appending.
        #[arg(long)]
        replace: bool,
    },

    /// Manage the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Base hex color.
    pub hex: String,

    /// Number of steps (clamped to 2-20).
    #[arg(long)]
    pub count: Option<usize>,

    /// Lightness curve (clamped to -1..1).
    #[arg(long, allow_hyphen_values = true)]
    pub curve: Option<f64>,

    /// Vary opacity instead of lightness.
    #[arg(long)]
    pub alpha: bool,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum PaletteCommand {
    /// Create a palette (random base color when omitted).
    New {
        hex: Option<String>,

        /// Create an alpha palette.
        #[arg(long, requires = "hex")]
        alpha: bool,
    },

    /// List stored palettes.
    List,

    /// Delete a palette by id.
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a commented default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Print the effective config as JSON.
    Show,

    /// Set one key (e.g. `palette.color_count`) and save the config file.
    ///
    /// The file is rewritten from the parsed config, so template comments
    /// are not kept.
    Set {
        key: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
