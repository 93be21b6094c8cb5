//! Sample grid geometry.
//!
//! Rows start at `i = h` and step down by `1/k` while `i > -h`, so the bottom
//! boundary itself never gets a row.  The step is subtracted from a running
//! value, exactly like a `while` loop would, so the last row may land a hair
//! above `-h` and still be drawn (`h = 1, k = 10` gives 21 rows ending at
//! `-1.0`).  Column `c` sits at `j = c/k`, runs while `j <= length`, and is
//! sampled half a cell to the right of `j`; columns come from integer
//! indices, so there are exactly `floor(lk) + 1` of them.

use std::iter;

use crate::core::{
    config::PlotConfig,
    constants::{GRID_SNAP_EPSILON, MAX_GRID_DIMENSION},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    half_height: f64,
    step: f64,
    chars_per_unit: u32,
}

impl Grid {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(cfg: &PlotConfig) -> Self {
        let step = cfg.step();
        let h = cfg.half_height;
        let rows = descending(h, step)
            .take_while(|&i| i > -h)
            .take(MAX_GRID_DIMENSION + 1)
            .count();
        let k = f64::from(cfg.chars_per_unit);
        let cols = (snap(cfg.length * k).floor() as usize)
            .min(MAX_GRID_DIMENSION)
            .saturating_add(1);
        Self {
            rows,
            cols,
            half_height: h,
            step,
            chars_per_unit: cfg.chars_per_unit,
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Vertical coordinate `i` of every row, top to bottom.
    pub fn row_values(&self) -> impl Iterator<Item = f64> + use<> {
        descending(self.half_height, self.step).take(self.rows)
    }

    /// Horizontal position `j` of column `c`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn column_position(&self, c: usize) -> f64 {
        c as f64 / f64::from(self.chars_per_unit)
    }

    /// Where the function is evaluated for column `c`: `j + 1/(2k)`.
    #[inline]
    #[must_use]
    pub fn sample_x(&self, c: usize) -> f64 {
        self.column_position(c) + self.step / 2.0
    }

    /// Column `c` starts a new unit.
    #[inline]
    #[must_use]
    pub fn is_tick(&self, c: usize) -> bool {
        c % self.chars_per_unit as usize == 0
    }
}

/// `top, top - step, top - 2·step, …` as a running difference.
fn descending(top: f64, step: f64) -> impl Iterator<Item = f64> {
    iter::successors(Some(top), move |i| Some(i - step))
}

/// Pull values within `GRID_SNAP_EPSILON` of a whole number onto it, so
/// `0.3 * 10` counts as 3 cells rather than 3.0000000000000004.
#[inline]
fn snap(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < GRID_SNAP_EPSILON { r } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(h: f64, l: f64, k: u32) -> Grid {
        Grid::new(&PlotConfig::builder(h, l, k).build().unwrap())
    }

    #[test]
    fn default_grid_is_21_by_61() {
        let g = grid(1.0, 60.0 / 10.0, 10);
        assert_eq!((g.rows(), g.cols()), (21, 61));
    }

    #[test]
    fn running_step_keeps_the_row_just_above_bottom() {
        let g = grid(1.0, 1.0, 10);
        let last = g.row_values().last().unwrap();
        assert!(last > -1.0);
        assert!((last + 1.0).abs() < 1e-12);
        assert_eq!(format!("{last:.1}"), "-1.0");
    }

    #[test]
    fn exact_steps_stop_before_bottom() {
        // 1/2 and 1/4 are exact, so -h itself is reached and excluded
        let g = grid(1.0, 1.0, 2);
        assert_eq!(g.row_values().collect::<Vec<_>>(), [1.0, 0.5, 0.0, -0.5]);
        assert_eq!(grid(1.0, 1.0, 4).rows(), 8);
    }

    #[test]
    fn fractional_extents() {
        let g = grid(0.25, 1.05, 10);
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 11); // floor(10.5) + 1

        assert_eq!(grid(0.26, 1.0, 10).rows(), 6);
    }

    #[test]
    fn float_noise_does_not_add_columns() {
        let g = grid(0.15, 0.3, 10);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
    }

    #[test]
    fn samples_are_centred_in_cells() {
        let g = grid(1.0, 6.0, 10);
        assert!((g.sample_x(0) - 0.05).abs() < 1e-12);
        assert!((g.sample_x(10) - 1.05).abs() < 1e-12);
    }

    #[test]
    fn ticks_fall_on_unit_boundaries() {
        let g = grid(1.0, 2.0, 4);
        let ticks: Vec<usize> = (0..g.cols()).filter(|&c| g.is_tick(c)).collect();
        assert_eq!(ticks, [0, 4, 8]);
    }

    #[test]
    fn largest_accepted_grid_does_not_overflow() {
        let max = MAX_GRID_DIMENSION as f64;
        let g = grid(max / 2.0, max - 1.0, 1);
        assert!(g.rows() <= MAX_GRID_DIMENSION + 1);
        assert_eq!(g.cols(), MAX_GRID_DIMENSION);
    }
}
