// File: crates/chartjs-core/src/types.rs
// Summary: Shared types and constants (chart type tokens, tri-state flags, default precision).

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ChartError;

/// Default number of decimals written for every data coordinate.
/// Precision is a `u16`: larger values are not accepted by Rust float formatting.
pub const DEFAULT_PRECISION: u16 = 2;

/// Chart (or per-dataset override) type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Bubble,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Line, ChartType::Bar, ChartType::Bubble];

    pub const fn as_str(self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Bubble => "bubble",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownToken { kind: "chart type", token: s.to_string() })
    }
}

impl Serialize for ChartType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Boolean with a distinguishable "not set" state.
///
/// `Unset` fields are left out of the JSON entirely (pair with
/// `skip_serializing_if = "TriBool::is_unset"`); `True`/`False` are always
/// written as literals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TriBool {
    #[default]
    Unset,
    True,
    False,
}

impl TriBool {
    pub const fn is_unset(&self) -> bool {
        matches!(self, TriBool::Unset)
    }

    pub const fn get(self) -> Option<bool> {
        match self {
            TriBool::Unset => None,
            TriBool::True => Some(true),
            TriBool::False => Some(false),
        }
    }
}

impl From<bool> for TriBool {
    fn from(b: bool) -> Self {
        if b { TriBool::True } else { TriBool::False }
    }
}

impl From<Option<bool>> for TriBool {
    fn from(b: Option<bool>) -> Self {
        b.map_or(TriBool::Unset, TriBool::from)
    }
}

impl Serialize for TriBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(b) => serializer.serialize_bool(b),
            None => serializer.serialize_none(),
        }
    }
}
