//! Geometry helpers: label width + terminal size plumbing.

use std::fmt::Write;

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{
    DECIMAL_PRECISION, FALLBACK_TERMINAL_HEIGHT, FALLBACK_TERMINAL_WIDTH,
};

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((
        Width(FALLBACK_TERMINAL_WIDTH),
        Height(FALLBACK_TERMINAL_HEIGHT),
    ))
}

/// How wide will the row labels be for a plot spanning `±half_height`?
///
/// The bottom label carries the minus sign, so it is usually the wider one.
#[must_use]
pub fn row_label_width(half_height: f64) -> usize {
    let mut s = String::new();
    // writing into a String cannot fail
    let _ = write!(&mut s, "{:.*}", DECIMAL_PRECISION, half_height);
    let top = s.len();
    s.clear();
    let _ = write!(&mut s, "{:.*}", DECIMAL_PRECISION, -half_height);
    top.max(s.len())
}

/// Longest length (in units) whose rows still fit in `columns` characters.
///
/// A row is `floor(length * k) + 1` cells, one space and the label.  At least
/// one cell width is returned so tiny terminals still produce a valid plot.
#[must_use]
pub fn fit_length(columns: usize, half_height: f64, chars_per_unit: u32) -> f64 {
    let cells = columns.saturating_sub(row_label_width(half_height) + 1);
    let extra_cells = cells.saturating_sub(1).max(1);
    #[allow(clippy::cast_precision_loss)]
    let extra = extra_cells as f64;
    extra / f64::from(chars_per_unit)
}
