//! Public-facing crate root – re-exports + one-shot helpers.

pub mod cli;
pub mod core;
pub mod render;

use std::io::{Write, stdout};

pub use crate::core::{
    coil::{Coil, InductanceReport},
    color::{AnsiCode, ColorError},
    config::{PlotConfig, PlotConfigBuilder},
    constants::DECIMAL_PRECISION,
    curve::{Curve, Partial},
    error::{ConfigError, DomainError, ExprError, GraphError},
    expr::Expr,
};

pub use crate::render::{Grid, PlotSummary, Renderer};

/// Plot `curve` on stdout with the default glyphs.
///
/// The grid spans `±half_height` vertically and `0..=length` horizontally,
/// with `chars_per_unit` character cells per unit.  Points where the curve is
/// undefined are left blank.
pub fn plot<C>(
    half_height: f64,
    length: f64,
    curve: &C,
    chars_per_unit: u32,
) -> Result<(), GraphError>
where
    C: Curve + ?Sized,
{
    let cfg = PlotConfig::builder(half_height, length, chars_per_unit).build()?;
    Renderer::new().render(&cfg, curve, &mut stdout().lock())?;
    Ok(())
}

/// Print the cross-section area and inductance of an air-core coil.
pub fn coil_inductance(diameter: f64, length: f64, turns: u32) -> Result<(), GraphError> {
    let report = Coil::new(diameter, length, turns)?.report();
    write!(stdout().lock(), "{report}")?;
    Ok(())
}
