use clap::{Parser, Subcommand};

use crate::core::constants::{
    AIR_PERMEABILITY, BLANK_GLYPH, DEFAULT_CHARS_PER_UNIT, DEFAULT_COIL_DIAMETER,
    DEFAULT_COIL_LENGTH, DEFAULT_COIL_TURNS, DEFAULT_HALF_HEIGHT, FILLED_GLYPH, TICK_GLYPH,
};
use crate::core::expr::DEFAULT_PRESET;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "termigraph",
    about = "Plot functions as text on a terminal, and other small calculators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot a function as filled ASCII art
    Plot(PlotArgs),
    /// Inductance of an air-core coil
    Coil(CoilArgs),
    /// List the named functions accepted by `plot --function`
    Functions,
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// `termigraph plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// Named function (see `termigraph functions`)
    #[arg(short, long, default_value = DEFAULT_PRESET)]
    pub function: String,

    /// Expression in `x`, e.g. "sin(x^2)"; overrides --function
    #[arg(short, long, conflicts_with = "function")]
    pub expr: Option<String>,

    /// Vertical extent above and below zero, in units
    #[arg(long, default_value_t = DEFAULT_HALF_HEIGHT)]
    pub half_height: f64,

    /// Horizontal extent in units (default: 60 characters' worth)
    #[arg(short, long)]
    pub length: Option<f64>,

    /// Character cells per unit
    #[arg(short = 'k', long, default_value_t = DEFAULT_CHARS_PER_UNIT)]
    pub chars_per_unit: u32,

    /// Stretch the plot to the terminal width
    #[arg(long, conflicts_with = "length")]
    pub fit: bool,

    /// Glyph for cells under the curve
    #[arg(long, default_value_t = FILLED_GLYPH)]
    pub filled: char,

    /// Glyph for empty cells
    #[arg(long, default_value_t = BLANK_GLYPH)]
    pub blank: char,

    /// Axis glyph on unit boundaries
    #[arg(long, default_value_t = TICK_GLYPH)]
    pub tick: char,

    /// Color for filled cells (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<String>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `termigraph coil …`
#[derive(Parser, Debug)]
pub struct CoilArgs {
    /// Coil diameter in metres
    #[arg(short, long, default_value_t = DEFAULT_COIL_DIAMETER)]
    pub diameter: f64,

    /// Core length in metres
    #[arg(short, long, default_value_t = DEFAULT_COIL_LENGTH)]
    pub length: f64,

    /// Number of turns
    #[arg(short = 'n', long, default_value_t = DEFAULT_COIL_TURNS)]
    pub turns: u32,

    /// Core permeability in H/m
    #[arg(long, default_value_t = AIR_PERMEABILITY)]
    pub permeability: f64,

    /// Echo inputs to stderr
    #[arg(long)]
    pub debug: bool,
}
