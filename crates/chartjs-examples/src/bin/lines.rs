// File: crates/chartjs-examples/src/bin/lines.rs
// Summary: Minimal example that builds a simple line chart and prints its chart.js JSON.

use anyhow::Result;
use chartjs_core::{Axis, AxisType, Chart, ChartType, Dataset, JsonOptions, Points, Rgba};

fn main() -> Result<()> {
    // Build a simple line series
    let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = vec![0.0, 1.2, 0.8, 1.8, 1.4, 2.0];

    let mut chart = Chart::new(ChartType::Line);
    chart.add_dataset(
        Dataset::new(Points::xy(xs, ys))
            .with_label("signal")
            .with_border_color(Rgba::opaque(64, 160, 255))
            .with_fill(false),
    );
    chart.add_x_axis(Axis::new(AxisType::Linear).with_label("X"));
    chart.add_y_axis(Axis::new(AxisType::Linear).with_label("Y").with_display(true));

    println!("{}", chart.to_json_with(&JsonOptions::default().pretty())?);
    Ok(())
}
