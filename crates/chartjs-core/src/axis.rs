// File: crates/chartjs-core/src/axis.rs
// Summary: Axis ("scale" in chart.js terms) model, axis tokens, and the ordered X/Y axis lists.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ChartError;
use crate::types::TriBool;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisType {
    /// Categorical axis, used for bar plots.
    #[default]
    Category,
    /// Numeric axis, used for scatter and bubble plots.
    Linear,
    Log,
    Time,
    Radial,
}

impl AxisType {
    pub const ALL: [AxisType; 5] =
        [AxisType::Category, AxisType::Linear, AxisType::Log, AxisType::Time, AxisType::Radial];

    pub const fn as_str(self) -> &'static str {
        match self {
            AxisType::Category => "category",
            AxisType::Linear => "linear",
            AxisType::Log => "logarithmic",
            AxisType::Time => "time",
            AxisType::Radial => "radialLinear",
        }
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownToken { kind: "axis type", token: s.to_string() })
    }
}

impl Serialize for AxisType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Where an axis is drawn. An axis without a position leaves the choice to chart.js.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisPosition {
    Bottom,
    Top,
    Left,
    Right,
}

impl AxisPosition {
    pub const ALL: [AxisPosition; 4] =
        [AxisPosition::Bottom, AxisPosition::Top, AxisPosition::Left, AxisPosition::Right];

    pub const fn as_str(self) -> &'static str {
        match self {
            AxisPosition::Bottom => "bottom",
            AxisPosition::Top => "top",
            AxisPosition::Left => "left",
            AxisPosition::Right => "right",
        }
    }
}

impl fmt::Display for AxisPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisPosition {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownToken { kind: "axis position", token: s.to_string() })
    }
}

impl Serialize for AxisPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "gridLine", skip_serializing_if = "TriBool::is_unset")]
    pub grid_lines: TriBool,
    #[serde(skip_serializing_if = "TriBool::is_unset")]
    pub stacked: TriBool,
    #[serde(skip_serializing_if = "TriBool::is_unset")]
    pub display: TriBool,
}

impl Axis {
    pub fn new(axis_type: AxisType) -> Self {
        Self { axis_type, ..Self::default() }
    }

    pub fn with_position(mut self, position: AxisPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_grid_lines(mut self, on: bool) -> Self {
        self.grid_lines = on.into();
        self
    }

    pub fn with_stacked(mut self, on: bool) -> Self {
        self.stacked = on.into();
        self
    }

    pub fn with_display(mut self, on: bool) -> Self {
        self.display = on.into();
        self
    }
}

/// X and Y axes in emission order. `Chart::add_x_axis`/`add_y_axis` are usually simpler.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Axes {
    #[serde(rename = "xAxes", skip_serializing_if = "Vec::is_empty")]
    pub x_axes: Vec<Axis>,
    #[serde(rename = "yAxes", skip_serializing_if = "Vec::is_empty")]
    pub y_axes: Vec<Axis>,
}

impl Axes {
    pub fn add_x(&mut self, x: Axis) {
        self.x_axes.push(x);
    }

    pub fn add_y(&mut self, y: Axis) {
        self.y_axes.push(y);
    }

    pub fn is_empty(&self) -> bool {
        self.x_axes.is_empty() && self.y_axes.is_empty()
    }
}
