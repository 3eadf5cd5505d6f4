// File: crates/chartjs-examples/src/bin/bubbles.rs
// Summary: Bubble chart example; also shows the shape error for mismatched radii.

use anyhow::Result;
use chartjs_core::{Axis, AxisType, Chart, ChartType, Dataset, Points, Rgba};

fn main() -> Result<()> {
    let mut chart = Chart::new(ChartType::Bubble);
    chart.add_dataset(
        Dataset::new(Points::bubbles(vec![1.0, 2.0, 3.0], vec![4.0, 1.5, 3.0], vec![5.0, 10.0, 7.5]))
            .with_label("bubbles")
            .with_background_color(Rgba::new(220, 80, 80, 128)),
    );
    chart.add_x_axis(Axis::new(AxisType::Linear));
    chart.add_y_axis(Axis::new(AxisType::Linear));
    println!("{}", chart.to_json()?);

    // One radius short: serialization fails as a whole.
    chart.add_dataset(Dataset::new(Points::bubbles(vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0])));
    if let Err(e) = chart.to_json() {
        eprintln!("expected error: {e}");
    }
    Ok(())
}
