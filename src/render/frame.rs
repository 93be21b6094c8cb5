//! Streams a plot into any `io::Write`, one `write_all` per row.
//!
//! Each row is built in a reusable buffer: the cells, a space, and the row's
//! vertical coordinate.  The axis row follows with a tick on every unit
//! boundary and no label.

use std::{fmt::Write as _, io::Write};

use crate::{
    core::{
        config::PlotConfig, constants::DECIMAL_PRECISION, curve::Curve, error::GraphError,
    },
    render::grid::Grid,
};

/// What a render pass drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlotSummary {
    pub rows: usize,
    pub cols: usize,
    pub filled: usize,
    /// Samples where the function had no value.
    pub undefined: usize,
}

#[derive(Debug, Default)]
pub struct Renderer {
    cells: String,
    line: String,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<C, W>(
        &mut self,
        cfg: &PlotConfig,
        curve: &C,
        out: &mut W,
    ) -> Result<PlotSummary, GraphError>
    where
        C: Curve + ?Sized,
        W: Write,
    {
        let grid = Grid::new(cfg);
        let mut summary = PlotSummary {
            rows: grid.rows(),
            cols: grid.cols(),
            ..PlotSummary::default()
        };

        for i in grid.row_values() {
            self.cells.clear();
            for c in 0..grid.cols() {
                let glyph = match curve.eval(grid.sample_x(c)) {
                    Ok(y) if i < y => {
                        summary.filled += 1;
                        cfg.filled
                    }
                    Ok(_) => cfg.blank,
                    Err(_) => {
                        summary.undefined += 1;
                        cfg.blank
                    }
                };
                self.cells.push(glyph);
            }

            self.line.clear();
            match &cfg.color {
                Some(color) => color.paint_into(&mut self.line, &self.cells),
                None => self.line.push_str(&self.cells),
            }
            // writing into a String cannot fail
            let _ = writeln!(self.line, " {:.*}", DECIMAL_PRECISION, i);
            out.write_all(self.line.as_bytes())?;
        }

        self.line.clear();
        self.line.extend(
            (0..grid.cols()).map(|c| if grid.is_tick(c) { cfg.tick } else { cfg.blank }),
        );
        self.line.push('\n');
        out.write_all(self.line.as_bytes())?;
        out.flush()?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color::AnsiCode, curve::Partial};

    fn render<C: Curve>(cfg: &PlotConfig, f: &C) -> (String, PlotSummary) {
        let mut out = Vec::new();
        let summary = Renderer::new().render(cfg, f, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn tiny_plot_exact_text() {
        let cfg = PlotConfig::builder(1.0, 2.0, 2).build().unwrap();
        let (text, summary) = render(&cfg, &|x: f64| x - 1.0);
        // samples at 0.25, 0.75, 1.25, 1.75, 2.25 -> y = -0.75 .. 1.25
        let expected = "\
    # 1.0
   ## 0.5
  ### 0.0
  #### -0.5
| | |
";
        assert_eq!(text, expected);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.cols, 5);
        assert_eq!(summary.filled, 1 + 2 + 3 + 4);
        assert_eq!(summary.undefined, 0);
    }

    #[test]
    fn undefined_samples_are_blank() {
        let cfg = PlotConfig::builder(1.0, 1.0, 4).build().unwrap();
        let (text, summary) = render(&cfg, &Partial(|x: f64| (x > 0.5).then_some(10.0)));
        let first = text.lines().next().unwrap();
        assert_eq!(first, "  ### 1.0");
        assert_eq!(summary.undefined, 2 * summary.rows);
    }

    #[test]
    fn colour_wraps_cells_but_not_label() {
        let cfg = PlotConfig::builder(0.5, 0.5, 2)
            .color(AnsiCode::Basic(1))
            .build()
            .unwrap();
        let (text, _) = render(&cfg, &|_: f64| 1.0);
        assert_eq!(text.lines().next().unwrap(), "\x1b[31m##\x1b[0m 0.5");
        // axis row stays plain
        assert_eq!(text.lines().last().unwrap(), "| ");
    }

    #[test]
    fn custom_glyphs() {
        let cfg = PlotConfig::builder(0.5, 1.0, 1)
            .filled('*')
            .blank('.')
            .tick('+')
            .build()
            .unwrap();
        let (text, _) = render(&cfg, &|x: f64| if x < 1.0 { 1.0 } else { -1.0 });
        assert_eq!(text, "*. 0.5\n++\n");
    }
}
