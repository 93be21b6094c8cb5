//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod coil;
pub mod color;
pub mod config;
pub mod constants;
pub mod curve;
pub mod error;
pub mod expr;

// re-export frequently-used items for convenience
pub use coil::{Coil, InductanceReport};
pub use color::{AnsiCode, ColorError};
pub use config::{PlotConfig, PlotConfigBuilder};
pub use constants::{BLANK_GLYPH, DECIMAL_PRECISION, FILLED_GLYPH, TICK_GLYPH};
pub use curve::{Curve, Partial};
pub use error::{ConfigError, DomainError, ExprError, GraphError};
pub use expr::{Expr, PRESETS, Preset};
