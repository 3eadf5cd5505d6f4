// File: crates/chartjs-core/src/lib.rs
// Summary: Core library entry point; exports the chart.js config model and JSON serialization API.

//! Build a `Chart`, add datasets and axes, then call `Chart::to_json`:
//!
//! ```
//! use chartjs_core::{Axis, AxisType, Chart, ChartType, Dataset, Points};
//!
//! let mut chart = Chart::new(ChartType::Line);
//! chart.add_dataset(Dataset::new(Points::xy(vec![1.0, 2.0], vec![3.0, 4.0])).with_label("a"));
//! chart.add_x_axis(Axis::new(AxisType::Linear));
//! let json = chart.to_json().unwrap();
//! assert!(json.contains(r#""data":[{"x":1.00,"y":3.00},{"x":2.00,"y":4.00}]"#));
//! ```

pub mod axis;
pub mod chart;
pub mod color;
pub mod dataset;
pub mod error;
pub mod series;
pub mod types;

pub use axis::{Axes, Axis, AxisPosition, AxisType};
pub use chart::{Chart, Data, JsonOptions, Options};
pub use color::Rgba;
pub use dataset::{Dataset, EncodedDataset};
pub use error::{ChartError, Result, ShapeError};
pub use series::{encode_values, shape_of, Points, Shape, Values};
pub use types::{ChartType, TriBool, DEFAULT_PRECISION};
