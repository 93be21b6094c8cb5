//! Byte-exact output of the stock invocations: `plot` with its defaults and
//! `coil` with its defaults.

use termigraph::{Coil, Expr, PlotConfig, Renderer};

const SIN_SQ_DEFAULT: &str = include_str!("fixtures/sin_sq_default.txt");

fn render(cfg: &PlotConfig, curve: &Expr) -> String {
    let mut out = Vec::new();
    Renderer::new().render(cfg, curve, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn default_plot_matches_fixture() {
    let cfg = PlotConfig::builder(1.0, 60.0 / 10.0, 10).build().unwrap();
    let curve = Expr::parse("sin(x^2)").unwrap();
    assert_eq!(render(&cfg, &curve), SIN_SQ_DEFAULT);
}

#[test]
fn closure_and_expression_agree() {
    let cfg = PlotConfig::builder(1.0, 6.0, 10).build().unwrap();
    let mut out = Vec::new();
    Renderer::new()
        .render(&cfg, &|x: f64| x.powf(2.0).sin(), &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), SIN_SQ_DEFAULT);
}

#[test]
fn fixture_shape() {
    let lines: Vec<&str> = SIN_SQ_DEFAULT.lines().collect();
    assert_eq!(lines.len(), 21 + 1);
    assert!(lines[0].ends_with(" 1.0"));
    assert!(lines[19].ends_with(" -0.9"));
    // 1 - 20 * 0.1 lands a hair above -1, so the bottom row survives.
    assert_eq!(lines[20], format!("{} -1.0", "#".repeat(61)));
    assert_eq!(lines[21].len(), 61);
}

#[test]
fn default_coil_report() {
    let coil = Coil::new(0.002, 0.02, 400).unwrap();
    assert_eq!(coil.report().to_string(), "A = 3.14 mm^2\nL = 31.567 μH\n");
}

#[test]
fn one_shot_helpers_validate_before_printing() {
    assert!(termigraph::plot(1.0, 1.0, &|x: f64| x - 0.5, 4).is_ok());
    assert!(matches!(
        termigraph::plot(1.0, 1.0, &|x: f64| x, 0),
        Err(termigraph::GraphError::Config(termigraph::ConfigError::ZeroCharsPerUnit))
    ));
    assert!(termigraph::coil_inductance(0.002, 0.02, 400).is_ok());
    assert!(termigraph::coil_inductance(-0.002, 0.02, 400).is_err());
}
