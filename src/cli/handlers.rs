use std::{
    io::{Write, stdout},
    time::Instant,
};

use crate::{
    core::{
        bounds::{fit_length, terminal_geometry},
        coil::Coil,
        color::{AnsiCode, NAMED_COLORS},
        config::PlotConfig,
        constants::DEFAULT_COLUMNS,
        error::GraphError,
        expr::{self, Expr, PRESETS},
    },
    render::Renderer,
};

use super::parse::{CoilArgs, PlotArgs};

/// Resolve `--expr` / `--function` into something plottable.
fn curve_from_args(a: &PlotArgs) -> Result<Expr, GraphError> {
    match &a.expr {
        Some(src) => Ok(Expr::parse(src)?),
        None => {
            let preset = expr::preset(&a.function)
                .ok_or_else(|| GraphError::UnknownFunction(a.function.clone()))?;
            Ok(Expr::parse(preset.source)?)
        }
    }
}

/// Everything `plot` needs before it touches stdout.
///
/// `columns` is only asked for under `--fit`.
pub(crate) fn plot_setup(
    a: &PlotArgs,
    columns: impl FnOnce() -> usize,
) -> Result<(Expr, PlotConfig), GraphError> {
    let curve = curve_from_args(a)?;
    let color = a.color.as_deref().map(AnsiCode::from_name).transpose()?;

    let length = if a.fit {
        fit_length(columns(), a.half_height, a.chars_per_unit.max(1))
    } else {
        // 60 characters' worth of units unless told otherwise
        a.length
            .unwrap_or_else(|| f64::from(DEFAULT_COLUMNS) / f64::from(a.chars_per_unit.max(1)))
    };

    let cfg = PlotConfig::builder(a.half_height, length, a.chars_per_unit)
        .filled(a.filled)
        .blank(a.blank)
        .tick(a.tick)
        .color_opt(color)
        .build()?;
    Ok((curve, cfg))
}

pub fn plot(a: &PlotArgs) -> Result<(), GraphError> {
    let t_setup = Instant::now();
    let (curve, cfg) = plot_setup(a, || usize::from(terminal_geometry().0.0))?;
    let setup_us = t_setup.elapsed().as_micros();

    let t_render = Instant::now();
    let summary = Renderer::new().render(&cfg, &curve, &mut stdout().lock())?;
    if a.debug {
        eprintln!(
            "plot f(x) = {curve}: {}×{} cells, {} filled, {} undefined   setup {setup_us} µs   render {} µs",
            summary.cols,
            summary.rows,
            summary.filled,
            summary.undefined,
            t_render.elapsed().as_micros(),
        );
    }
    Ok(())
}

pub fn coil(a: &CoilArgs) -> Result<(), GraphError> {
    let coil = Coil::with_permeability(a.diameter, a.length, a.turns, a.permeability)?;
    if a.debug {
        eprintln!(
            "coil: d = {} m, l = {} m, N = {}, μ = {} H/m",
            coil.diameter, coil.length, coil.turns, coil.permeability
        );
    }
    write!(stdout().lock(), "{}", coil.report())?;
    Ok(())
}

/// List the named functions and their expressions.
pub fn functions() {
    println!("\nNamed functions (use with --function, or pass your own with --expr):");
    let width = PRESETS.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for p in PRESETS {
        println!("  {:width$}  {:18}  {}", p.name, p.source, p.about);
    }
    println!(
        "\nExpressions understand + - * / ^, parentheses, x, pi, e and\n\
         sin cos tan asin acos atan sinh cosh tanh exp ln log10 log2 sqrt abs floor ceil.\n"
    );
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in NAMED_COLORS {
        let mut s = String::new();
        code.paint_into(&mut s, name);
        println!("{s}");
    }
    let mut s = String::new();
    AnsiCode::Rgb(0xd2, 0x87, 0x0a).paint_into(&mut s, "#d2870a");
    println!("{s}  (or any other #RRGGBB)\n");
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Classic sin(x²)   : {bin} plot
• Zoomed in         : {bin} plot -k 20 --half-height 1.5
• Own expression    : {bin} plot --expr \"sqrt(x) - 1\" --length 8
• Full width, color : {bin} plot --function sin --fit --color cyan
• Custom glyphs     : {bin} plot --filled '*' --blank '.' --tick '+'
• Coil inductance   : {bin} coil --diameter 0.002 --length 0.02 --turns 400
• Debug mode        : {bin} plot --debug
"
    );
}
