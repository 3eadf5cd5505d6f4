// File: crates/chartjs-core/src/chart.rs
// Summary: Chart aggregate (type, data, options) and the JSON output pipeline.

use std::io;

use serde::Serialize;

use crate::axis::{Axes, Axis};
use crate::dataset::{Dataset, EncodedDataset};
use crate::error::Result;
use crate::types::{ChartType, TriBool, DEFAULT_PRECISION};

/// Output settings shared by every serialization entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    /// Decimals written for each data coordinate.
    pub precision: u16,
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION, pretty: false }
    }
}

impl JsonOptions {
    pub fn with_precision(mut self, precision: u16) -> Self {
        self.precision = precision;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub(crate) fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    pub(crate) fn render_to<W: io::Write, T: Serialize>(&self, writer: W, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(writer, value)?;
        } else {
            serde_json::to_writer(writer, value)?;
        }
        Ok(())
    }
}

/// Datasets plus the category labels shared by them.
#[derive(Default)]
pub struct Data {
    pub datasets: Vec<Dataset>,
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(skip_serializing_if = "TriBool::is_unset")]
    pub responsive: TriBool,
    #[serde(skip_serializing_if = "TriBool::is_unset")]
    pub maintain_aspect_ratio: TriBool,
    #[serde(skip_serializing_if = "Axes::is_empty")]
    pub scales: Axes,
}

impl Options {
    pub fn is_empty(&self) -> bool {
        self.responsive.is_unset() && self.maintain_aspect_ratio.is_unset() && self.scales.is_empty()
    }
}

#[derive(Default)]
pub struct Chart {
    pub chart_type: ChartType,
    pub label: String,
    pub data: Data,
    pub options: Options,
}

#[derive(Serialize)]
struct ChartDocument<'a> {
    #[serde(rename = "type")]
    chart_type: ChartType,
    #[serde(skip_serializing_if = "str::is_empty")]
    label: &'a str,
    data: DataDocument<'a>,
    #[serde(skip_serializing_if = "Options::is_empty")]
    options: &'a Options,
}

#[derive(Serialize)]
struct DataDocument<'a> {
    datasets: Vec<EncodedDataset<'a>>,
    labels: &'a [String],
}

impl Chart {
    pub fn new(chart_type: ChartType) -> Self {
        Self { chart_type, ..Self::default() }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.data.datasets.push(dataset);
    }

    /// Append a category label (the X positions of bar charts).
    pub fn add_label(&mut self, label: impl Into<String>) {
        self.data.labels.push(label.into());
    }

    pub fn add_x_axis(&mut self, x: Axis) {
        self.options.scales.add_x(x);
    }

    pub fn add_y_axis(&mut self, y: Axis) {
        self.options.scales.add_y(y);
    }

    /// Serialize with default options (2 decimals, compact).
    pub fn to_json(&self) -> Result<String> {
        self.to_json_with(&JsonOptions::default())
    }

    pub fn to_json_with(&self, opts: &JsonOptions) -> Result<String> {
        opts.render(&self.document(opts)?)
    }

    /// Stream the JSON into `writer`. Nothing is written if a dataset fails to encode.
    pub fn write_json<W: io::Write>(&self, writer: W, opts: &JsonOptions) -> Result<()> {
        opts.render_to(writer, &self.document(opts)?)
    }

    fn document(&self, opts: &JsonOptions) -> Result<ChartDocument<'_>> {
        tracing::debug!(
            chart_type = %self.chart_type,
            datasets = self.data.datasets.len(),
            x_axes = self.options.scales.x_axes.len(),
            y_axes = self.options.scales.y_axes.len(),
            precision = opts.precision,
            pretty = opts.pretty,
            "serializing chart"
        );
        let datasets = self
            .data
            .datasets
            .iter()
            .map(|d| d.encode(opts))
            .collect::<Result<Vec<_>>>()?;
        Ok(ChartDocument {
            chart_type: self.chart_type,
            label: &self.label,
            data: DataDocument { datasets, labels: &self.data.labels },
            options: &self.options,
        })
    }
}
