//! Grid invariants checked over random configurations.

use proptest::prelude::*;
use termigraph::{Curve, Partial, PlotConfig, PlotSummary, Renderer};

fn render<C: Curve>(cfg: &PlotConfig, curve: &C) -> (Vec<String>, PlotSummary) {
    let mut out = Vec::new();
    let summary = Renderer::new().render(cfg, curve, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    (text.lines().map(str::to_owned).collect(), summary)
}

/// Split a grid row into its cells and its numeric label.
fn split_row(row: &str) -> (&str, f64) {
    let (cells, label) = row.rsplit_once(' ').unwrap();
    (cells, label.parse().unwrap())
}

/// Row coordinates as a plain loop produces them: start at the top, subtract
/// one cell height per row, stop once the bottom edge is reached.
fn row_values(cfg: &PlotConfig) -> Vec<f64> {
    let step = 1.0 / f64::from(cfg.chars_per_unit);
    let mut rows = Vec::new();
    let mut i = cfg.half_height;
    while i > -cfg.half_height {
        rows.push(i);
        i -= step;
    }
    rows
}

/// Quarter-unit extents keep `2hk` and `lk` clear of float ties.
fn config() -> impl Strategy<Value = PlotConfig> {
    (1u32..=12, 1u32..=40, 1u32..=12).prop_map(|(h4, l4, k)| {
        PlotConfig::builder(f64::from(h4) / 4.0, f64::from(l4) / 4.0, k)
            .build()
            .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn row_count_follows_the_stepping_loop(cfg in config()) {
        let (lines, summary) = render(&cfg, &|_: f64| 0.0);
        let expected = row_values(&cfg).len();
        prop_assert_eq!(summary.rows, expected);
        prop_assert_eq!(lines.len(), expected + 1);
        // Float drift can only ever keep one extra row.
        let k = f64::from(cfg.chars_per_unit);
        let span = (2.0 * cfg.half_height * k).ceil() as usize;
        prop_assert!(expected == span || expected == span + 1);
    }

    #[test]
    fn every_row_has_floor_plus_one_cells(cfg in config()) {
        let (lines, summary) = render(&cfg, &|x: f64| x.sin());
        let k = f64::from(cfg.chars_per_unit);
        let expected = (cfg.length * k).floor() as usize + 1;
        prop_assert_eq!(summary.cols, expected);
        for row in &lines[..summary.rows] {
            let (cells, _) = split_row(row);
            prop_assert_eq!(cells.chars().count(), expected);
        }
        prop_assert_eq!(lines[summary.rows].chars().count(), expected);
    }

    #[test]
    fn zero_fills_exactly_the_negative_rows(cfg in config()) {
        let (lines, _) = render(&cfg, &|_: f64| 0.0);
        for (r, (row, i)) in lines.iter().zip(row_values(&cfg)).enumerate() {
            let (cells, _) = split_row(row);
            let want = if i < 0.0 { '#' } else { ' ' };
            prop_assert!(cells.chars().all(|c| c == want), "row {r} ({i}): {row:?}");
        }
    }

    #[test]
    fn labels_step_down_from_half_height(cfg in config()) {
        let (lines, summary) = render(&cfg, &|_: f64| 0.0);
        let k = f64::from(cfg.chars_per_unit);
        for (r, row) in lines[..summary.rows].iter().enumerate() {
            let (_, label) = split_row(row);
            let i = cfg.half_height - r as f64 / k;
            prop_assert!((label - i).abs() <= 0.05 + 1e-9);
            prop_assert!(i > -cfg.half_height - 1e-9);
        }
    }

    #[test]
    fn ticks_mark_unit_boundaries(cfg in config()) {
        let (lines, _) = render(&cfg, &|_: f64| 0.0);
        let axis = lines.last().unwrap();
        let k = f64::from(cfg.chars_per_unit);
        for (c, glyph) in axis.chars().enumerate() {
            let j = c as f64 / k;
            let tick = (j * k).round() as u32 % cfg.chars_per_unit == 0;
            prop_assert_eq!(glyph == '|', tick, "column {}", c);
        }
    }

    #[test]
    fn nowhere_defined_is_all_blank(cfg in config()) {
        let (lines, summary) = render(&cfg, &Partial(|_: f64| -> Option<f64> { None }));
        prop_assert_eq!(summary.filled, 0);
        prop_assert_eq!(summary.undefined, summary.rows * summary.cols);
        for row in &lines[..summary.rows] {
            let (cells, _) = split_row(row);
            prop_assert!(cells.chars().all(|c| c == ' '));
        }
    }
}

#[test]
fn nan_everywhere_is_all_blank() {
    let cfg = PlotConfig::builder(1.0, 6.0, 10).build().unwrap();
    let (lines, summary) = render(&cfg, &|x: f64| (-1.0 - x).sqrt());
    assert_eq!(summary.undefined, 21 * 61);
    for row in &lines[..21] {
        let (cells, _) = split_row(row);
        assert_eq!(cells, " ".repeat(61));
    }
}
