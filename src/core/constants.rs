//! A collection of constants.

/// Cell lies under the curve
pub const FILLED_GLYPH: char = '#';
/// Cell lies on or above the curve, or the function is undefined there
pub const BLANK_GLYPH: char = ' ';
/// Axis-row marker placed on every unit boundary
pub const TICK_GLYPH: char = '|';

/// Row coordinates are rounded to the first decimal place.
///
/// 0.8999 becomes 0.9
pub const DECIMAL_PRECISION: usize = 1;

/// Grid extents closer than this to a whole number of cells are treated as whole.
pub const GRID_SNAP_EPSILON: f64 = 1e-9;

/// Upper bound on rows and on columns of a single plot
pub const MAX_GRID_DIMENSION: usize = 100_000;

/// Default vertical extent above (and below) the zero line, in units
pub const DEFAULT_HALF_HEIGHT: f64 = 1.0;
/// Default number of character columns
pub const DEFAULT_COLUMNS: u32 = 60;
/// Default zoom: character cells per unit
pub const DEFAULT_CHARS_PER_UNIT: u32 = 10;

/// Permeability of air used for coil cores (H/m)
pub const AIR_PERMEABILITY: f64 = 1.256e-6;
/// Default coil diameter (m)
pub const DEFAULT_COIL_DIAMETER: f64 = 0.2e-2;
/// Default coil core length (m)
pub const DEFAULT_COIL_LENGTH: f64 = 2e-2;
/// Default number of turns
pub const DEFAULT_COIL_TURNS: u32 = 400;

/// Terminal size assumed when stdout is not a tty
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;
/// Terminal size assumed when stdout is not a tty
pub const FALLBACK_TERMINAL_HEIGHT: u16 = 30;
