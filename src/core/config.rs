//! Run-time plot configuration + fluent builder.

use crate::core::{
    color::AnsiCode,
    constants::{BLANK_GLYPH, FILLED_GLYPH, MAX_GRID_DIMENSION, TICK_GLYPH},
    error::ConfigError,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub half_height: f64,
    pub length: f64,
    pub chars_per_unit: u32,
    pub filled: char,
    pub blank: char,
    pub tick: char,
    pub color: Option<AnsiCode>,
}

impl PlotConfig {
    #[inline]
    #[must_use]
    pub fn builder(half_height: f64, length: f64, chars_per_unit: u32) -> PlotConfigBuilder {
        PlotConfigBuilder::new(half_height, length, chars_per_unit)
    }

    /// Width of one character cell, in units.
    #[inline]
    #[must_use]
    pub fn step(&self) -> f64 {
        1.0 / f64::from(self.chars_per_unit)
    }
}

/// Fluent builder; nothing is checked until `build`.
#[derive(Debug)]
pub struct PlotConfigBuilder {
    half_height: f64,
    length: f64,
    chars_per_unit: u32,
    filled: char,
    blank: char,
    tick: char,
    color: Option<AnsiCode>,
}

impl PlotConfigBuilder {
    pub(crate) fn new(half_height: f64, length: f64, chars_per_unit: u32) -> Self {
        Self {
            half_height,
            length,
            chars_per_unit,
            filled: FILLED_GLYPH,
            blank: BLANK_GLYPH,
            tick: TICK_GLYPH,
            color: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn filled(mut self, c: char) -> Self {
        self.filled = c;
        self
    }
    #[inline]
    #[must_use]
    pub fn blank(mut self, c: char) -> Self {
        self.blank = c;
        self
    }
    #[inline]
    #[must_use]
    pub fn tick(mut self, c: char) -> Self {
        self.tick = c;
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, c: AnsiCode) -> Self {
        self.color = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn color_opt(mut self, c: Option<AnsiCode>) -> Self {
        self.color = c;
        self
    }

    pub fn build(self) -> Result<PlotConfig, ConfigError> {
        positive("half height", self.half_height)?;
        positive("length", self.length)?;
        if self.chars_per_unit == 0 {
            return Err(ConfigError::ZeroCharsPerUnit);
        }
        let k = f64::from(self.chars_per_unit);
        #[allow(clippy::cast_precision_loss)]
        let max = MAX_GRID_DIMENSION as f64;
        let tall = 2.0 * self.half_height * k;
        if tall > max {
            return Err(ConfigError::GridTooLarge {
                axis: "tall",
                cells: tall,
            });
        }
        let wide = self.length * k + 1.0;
        if wide > max {
            return Err(ConfigError::GridTooLarge {
                axis: "wide",
                cells: wide,
            });
        }
        Ok(PlotConfig {
            half_height: self.half_height,
            length: self.length,
            chars_per_unit: self.chars_per_unit,
            filled: self.filled,
            blank: self.blank,
            tick: self.tick,
            color: self.color,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<PlotConfigBuilder> for Result<PlotConfig, ConfigError> {
    fn from(b: PlotConfigBuilder) -> Self {
        b.build()
    }
}

/// Finite and strictly positive.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite(field));
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(value)
}
