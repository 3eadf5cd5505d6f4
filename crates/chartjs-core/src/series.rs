// File: crates/chartjs-core/src/series.rs
// Summary: Point data model (`Values` trait) and the encoder that writes it as a chart.js data array.
// Notes:
// - The JSON point shape is picked from which axes are populated:
//   X only -> bare numbers, X+Y -> {"x","y"}, X+Y+R -> {"x","y","r"}.
// - A series with no X but some Y is treated as X-only (bar convention).

use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::error::ShapeError;

/// Source of plottable data. Only `xs` is required.
pub trait Values {
    /// X values. If only these are given the series should be drawn as a bar plot.
    fn xs(&self) -> Cow<'_, [f64]>;

    fn ys(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(&[])
    }

    /// Radii, used for bubble plots.
    fn rs(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(&[])
    }
}

/// Column-backed point data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Points {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub rs: Vec<f64>,
}

impl Points {
    pub fn bars(xs: Vec<f64>) -> Self {
        Self { xs, ..Self::default() }
    }

    pub fn xy(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs, ys, rs: Vec::new() }
    }

    pub fn bubbles(xs: Vec<f64>, ys: Vec<f64>, rs: Vec<f64>) -> Self {
        Self { xs, ys, rs }
    }

    pub fn len(&self) -> usize {
        self.xs.len().max(self.ys.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Values for Points {
    fn xs(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(&self.xs)
    }
    fn ys(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(&self.ys)
    }
    fn rs(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(&self.rs)
    }
}

impl Values for [f64] {
    fn xs(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self)
    }
}

impl Values for Vec<f64> {
    fn xs(&self) -> Cow<'_, [f64]> {
        self.as_slice().xs()
    }
}

impl Values for Vec<(f64, f64)> {
    fn xs(&self) -> Cow<'_, [f64]> {
        self.iter().map(|p| p.0).collect()
    }
    fn ys(&self) -> Cow<'_, [f64]> {
        self.iter().map(|p| p.1).collect()
    }
}

impl Values for Vec<(f64, f64, f64)> {
    fn xs(&self) -> Cow<'_, [f64]> {
        self.iter().map(|p| p.0).collect()
    }
    fn ys(&self) -> Cow<'_, [f64]> {
        self.iter().map(|p| p.1).collect()
    }
    fn rs(&self) -> Cow<'_, [f64]> {
        self.iter().map(|p| p.2).collect()
    }
}

impl<T: Values + ?Sized> Values for Arc<T> {
    fn xs(&self) -> Cow<'_, [f64]> {
        (**self).xs()
    }
    fn ys(&self) -> Cow<'_, [f64]> {
        (**self).ys()
    }
    fn rs(&self) -> Cow<'_, [f64]> {
        (**self).rs()
    }
}

/// JSON form of each element in the data array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// `x`
    Bare,
    /// `{"x":x,"y":y}`
    Xy,
    /// `{"x":x,"y":y,"r":r}`
    Xyr,
}

struct Columns<'a> {
    shape: Shape,
    xs: Cow<'a, [f64]>,
    ys: Cow<'a, [f64]>,
    rs: Cow<'a, [f64]>,
}

fn columns(values: &dyn Values) -> Result<Columns<'_>, ShapeError> {
    let (mut xs, mut ys, rs) = (values.xs(), values.ys(), values.rs());
    if xs.is_empty() {
        if !rs.is_empty() {
            return Err(ShapeError::RadiusWithoutX);
        }
        xs = std::mem::take(&mut ys);
    }

    let shape = if !rs.is_empty() {
        if xs.len() != ys.len() || xs.len() != rs.len() {
            return Err(ShapeError::XyrLength { xs: xs.len(), ys: ys.len(), rs: rs.len() });
        }
        Shape::Xyr
    } else if !ys.is_empty() {
        if xs.len() != ys.len() {
            return Err(ShapeError::XyLength { xs: xs.len(), ys: ys.len() });
        }
        Shape::Xy
    } else {
        Shape::Bare
    };
    Ok(Columns { shape, xs, ys, rs })
}

/// Decide which point shape `values` encodes to, checking axis lengths.
pub fn shape_of(values: &dyn Values) -> Result<Shape, ShapeError> {
    columns(values).map(|c| c.shape)
}

/// Encode `values` as a JSON array, every coordinate written with `precision` decimals.
///
/// Non-finite coordinates are written as-is (`NaN`, `inf`) and are rejected later when
/// the text is parsed as JSON.
pub fn encode_values(values: &dyn Values, precision: u16) -> Result<String, ShapeError> {
    let Columns { shape, xs, ys, rs } = columns(values)?;

    let mut buf = String::with_capacity(2 + 8 * xs.len());
    buf.push('[');
    for (i, &x) in xs.iter().enumerate() {
        if i > 0 {
            buf.push(',');
        }
        match shape {
            Shape::Bare => push_num(&mut buf, x, precision),
            Shape::Xy => {
                buf.push_str("{\"x\":");
                push_num(&mut buf, x, precision);
                buf.push_str(",\"y\":");
                push_num(&mut buf, ys[i], precision);
                buf.push('}');
            }
            Shape::Xyr => {
                buf.push_str("{\"x\":");
                push_num(&mut buf, x, precision);
                buf.push_str(",\"y\":");
                push_num(&mut buf, ys[i], precision);
                buf.push_str(",\"r\":");
                push_num(&mut buf, rs[i], precision);
                buf.push('}');
            }
        }
    }
    buf.push(']');

    tracing::trace!(?shape, points = xs.len(), precision, "encoded values");
    Ok(buf)
}

#[inline]
fn push_num(buf: &mut String, v: f64, precision: u16) {
    let precision = usize::from(precision);
    // Writing into a String cannot fail.
    let _ = write!(buf, "{v:.precision$}");
}
