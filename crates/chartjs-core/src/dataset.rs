// File: crates/chartjs-core/src/dataset.rs
// Summary: Dataset model and its single-pass serializer (styling fields + encoded data array).

use std::io;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use crate::chart::JsonOptions;
use crate::color::Rgba;
use crate::error::Result;
use crate::series::{encode_values, Values};
use crate::types::{ChartType, TriBool};

/// One data series plus its rendering hints.
pub struct Dataset {
    pub data: Box<dyn Values + Send + Sync>,
    /// Per-dataset override of the chart type (mixed charts).
    pub chart_type: Option<ChartType>,
    pub background_color: Option<Rgba>,
    pub border_color: Option<Rgba>,
    /// Name of the dataset shown in the legend.
    pub label: String,
    pub fill: TriBool,
    pub line_tension: Option<f64>,
    pub point_radius: Option<f64>,
    pub show_line: TriBool,
    pub span_gaps: TriBool,
}

impl Dataset {
    pub fn new(data: impl Values + Send + Sync + 'static) -> Self {
        Self {
            data: Box::new(data),
            chart_type: None,
            background_color: None,
            border_color: None,
            label: String::new(),
            fill: TriBool::Unset,
            line_tension: None,
            point_radius: None,
            show_line: TriBool::Unset,
            span_gaps: TriBool::Unset,
        }
    }

    pub fn with_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = Some(chart_type);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_background_color(mut self, color: Rgba) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Rgba) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn with_fill(mut self, on: bool) -> Self {
        self.fill = on.into();
        self
    }

    pub fn with_line_tension(mut self, tension: f64) -> Self {
        self.line_tension = Some(tension);
        self
    }

    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = Some(radius);
        self
    }

    pub fn with_show_line(mut self, on: bool) -> Self {
        self.show_line = on.into();
        self
    }

    pub fn with_span_gaps(mut self, on: bool) -> Self {
        self.span_gaps = on.into();
        self
    }

    /// Encode the data array up front so shape errors surface before any JSON is written.
    pub fn encode(&self, opts: &JsonOptions) -> Result<EncodedDataset<'_>> {
        let values = encode_values(&*self.data, opts.precision)?;
        let data = RawValue::from_string(values)?;
        Ok(EncodedDataset { dataset: self, data })
    }

    pub fn to_json(&self) -> Result<String> {
        self.to_json_with(&JsonOptions::default())
    }

    pub fn to_json_with(&self, opts: &JsonOptions) -> Result<String> {
        self.log_serialize(opts);
        opts.render(&self.encode(opts)?)
    }

    pub fn write_json<W: io::Write>(&self, writer: W, opts: &JsonOptions) -> Result<()> {
        self.log_serialize(opts);
        opts.render_to(writer, &self.encode(opts)?)
    }

    fn log_serialize(&self, opts: &JsonOptions) {
        tracing::debug!(
            label = %self.label,
            chart_type = ?self.chart_type,
            precision = opts.precision,
            pretty = opts.pretty,
            "serializing dataset"
        );
    }
}

/// A dataset whose data array has already been validated and formatted.
pub struct EncodedDataset<'a> {
    dataset: &'a Dataset,
    data: Box<RawValue>,
}

impl EncodedDataset<'_> {
    /// The formatted data array.
    pub fn data(&self) -> &str {
        self.data.get()
    }
}

impl Serialize for EncodedDataset<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let d = self.dataset;
        let mut map = serializer.serialize_map(None)?;
        if let Some(t) = d.chart_type {
            map.serialize_entry("type", &t)?;
        }
        if let Some(c) = &d.background_color {
            map.serialize_entry("backgroundColor", c)?;
        }
        if let Some(c) = &d.border_color {
            map.serialize_entry("borderColor", c)?;
        }
        if !d.label.is_empty() {
            map.serialize_entry("label", &d.label)?;
        }
        if !d.fill.is_unset() {
            map.serialize_entry("fill", &d.fill)?;
        }
        if let Some(t) = d.line_tension {
            map.serialize_entry("lineTension", &t)?;
        }
        if let Some(r) = d.point_radius {
            map.serialize_entry("pointRadius", &r)?;
        }
        if !d.show_line.is_unset() {
            map.serialize_entry("showLine", &d.show_line)?;
        }
        if !d.span_gaps.is_unset() {
            map.serialize_entry("spanGaps", &d.span_gaps)?;
        }
        map.serialize_entry("data", &self.data)?;
        map.end()
    }
}
