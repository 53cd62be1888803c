//! Print a small SVG panel built from every shape type and one fitted label.
//!
//! Run with: RUST_LOG=debug cargo run --example panel --features tracing

use lcars_geom::{
    Direction, ElbowOrientation, FitParams, MeasuredText, chisel_endcap, elbow, fit_measured,
    rectangle, rounded_endcap, triangle,
};
use tracing_subscriber::EnvFilter;

fn path(d: impl std::fmt::Display, fill: &str) -> String {
    format!("  <path d=\"{d}\" fill=\"{fill}\"/>\n")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut body = String::new();
    body.push_str(&path(
        elbow(10.0, 220.0, 60.0, 24.0, 140.0, ElbowOrientation::TopLeft, 10.0, 30.0),
        "#f90",
    ));
    body.push_str(&path(rectangle(10.0, 156.0, 60.0, 40.0, 0.0), "#c9c"));
    body.push_str(&path(
        rounded_endcap(24.0, 24.0, Direction::Right, 480.0, 10.0),
        "#99f",
    ));
    body.push_str(&path(
        chisel_endcap(30.0, 24.0, Direction::Right, 480.0, 60.0, 0.0, 0.0),
        "#f66",
    ));
    body.push_str(&path(triangle(16.0, Direction::Right, 300.0, 100.0, 2.0), "#fc6"));

    // Header bar between the elbow arm and the endcap
    let label = "SUBSPACE COMMUNICATIONS ARRAY";
    let measured = MeasuredText::new(230.0, 18.0);
    let params = FitParams::default();
    let header = fit_measured(234.0, 476.0, label, measured, &params);
    body.push_str(&path(rectangle(header.bar1_x, 10.0, header.bar1_width, 24.0, 0.0), "#f90"));
    if header.shows_text() {
        body.push_str(&format!(
            "  <text x=\"{}\" y=\"28\" fill=\"#f90\">{}</text>\n",
            header.text_x, header.text
        ));
        body.push_str(&path(
            rectangle(header.bar2_x, 10.0, header.bar2_width, 24.0, 0.0),
            "#f90",
        ));
    }

    println!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 520 210\" style=\"background:#000\">\n{body}</svg>"
    );
}
