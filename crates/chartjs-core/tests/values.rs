// File: crates/chartjs-core/tests/values.rs
// Purpose: Validate point-shape selection, number formatting, and shape errors of the value encoder.

use std::sync::Arc;

use chartjs_core::{encode_values, shape_of, ChartError, Dataset, Points, Shape, ShapeError};

#[test]
fn x_only_is_bare_numbers() {
    let v = Points::bars(vec![1.0, 2.5, -3.0]);
    assert_eq!(shape_of(&v), Ok(Shape::Bare));
    assert_eq!(encode_values(&v, 2).unwrap(), "[1.00,2.50,-3.00]");
}

#[test]
fn y_without_x_is_treated_as_x() {
    let v = Points { xs: Vec::new(), ys: vec![4.0, 5.0], rs: Vec::new() };
    assert_eq!(shape_of(&v), Ok(Shape::Bare));
    assert_eq!(encode_values(&v, 2).unwrap(), "[4.00,5.00]");
}

#[test]
fn empty_series_is_empty_array() {
    assert_eq!(encode_values(&Points::default(), 2).unwrap(), "[]");
}

#[test]
fn xy_points() {
    let v = Points::xy(vec![1.0, 2.0], vec![3.0, 4.0]);
    assert_eq!(shape_of(&v), Ok(Shape::Xy));
    assert_eq!(encode_values(&v, 2).unwrap(), r#"[{"x":1.00,"y":3.00},{"x":2.00,"y":4.00}]"#);
}

#[test]
fn xyr_points() {
    let v = Points::bubbles(vec![1.0, -2.0], vec![2.0, 0.5], vec![3.5, 10.0]);
    assert_eq!(shape_of(&v), Ok(Shape::Xyr));
    assert_eq!(
        encode_values(&v, 2).unwrap(),
        r#"[{"x":1.00,"y":2.00,"r":3.50},{"x":-2.00,"y":0.50,"r":10.00}]"#
    );
}

#[test]
fn precision_applies_to_every_coordinate() {
    let v = Points::xy(vec![1.0, 2.25], vec![3.0, 4.75]);
    assert_eq!(encode_values(&v, 0).unwrap(), r#"[{"x":1,"y":3},{"x":2,"y":5}]"#);
    assert_eq!(encode_values(&v, 3).unwrap(), r#"[{"x":1.000,"y":3.000},{"x":2.250,"y":4.750}]"#);
}

#[test]
fn radius_without_x_fails() {
    let v = Points { xs: Vec::new(), ys: vec![1.0], rs: vec![1.0] };
    assert_eq!(encode_values(&v, 2), Err(ShapeError::RadiusWithoutX));
}

#[test]
fn xy_length_mismatch_fails() {
    let v = Points::xy(vec![1.0, 2.0], vec![3.0]);
    assert_eq!(encode_values(&v, 2), Err(ShapeError::XyLength { xs: 2, ys: 1 }));
}

#[test]
fn xyr_length_mismatch_fails() {
    let v = Points::bubbles(vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0]);
    assert_eq!(encode_values(&v, 2), Err(ShapeError::XyrLength { xs: 2, ys: 2, rs: 1 }));

    // Radius with X but no Y is a mismatch, not a silent fallback.
    let v = Points { xs: vec![1.0], ys: Vec::new(), rs: vec![1.0] };
    assert_eq!(encode_values(&v, 2), Err(ShapeError::XyrLength { xs: 1, ys: 0, rs: 1 }));
}

#[test]
fn computed_series() {
    let xy: Vec<(f64, f64)> = vec![(1.0, 2.0), (3.0, 4.0)];
    assert_eq!(encode_values(&xy, 1).unwrap(), r#"[{"x":1.0,"y":2.0},{"x":3.0,"y":4.0}]"#);

    let xyr: Vec<(f64, f64, f64)> = vec![(1.0, 2.0, 3.0)];
    assert_eq!(encode_values(&xyr, 1).unwrap(), r#"[{"x":1.0,"y":2.0,"r":3.0}]"#);

    let bare: Vec<f64> = vec![7.0];
    assert_eq!(encode_values(&bare, 1).unwrap(), "[7.0]");
}

#[test]
fn shared_series_behind_arc() {
    let shared = Arc::new(Points::xy(vec![0.0], vec![1.0]));
    let a = Dataset::new(Arc::clone(&shared)).with_label("a");
    let b = Dataset::new(shared).with_label("b");
    assert_eq!(a.to_json().unwrap(), r#"{"label":"a","data":[{"x":0.00,"y":1.00}]}"#);
    assert_eq!(b.to_json().unwrap(), r#"{"label":"b","data":[{"x":0.00,"y":1.00}]}"#);
}

#[test]
fn borrowed_slice_series() {
    let xs: Arc<[f64]> = Arc::from(vec![1.0, 2.0, 3.5]);
    assert_eq!(shape_of(&xs), Ok(Shape::Bare));
    assert_eq!(encode_values(&xs, 2).unwrap(), "[1.00,2.00,3.50]");

    let d = Dataset::new(xs).with_label("slice");
    assert_eq!(d.to_json().unwrap(), r#"{"label":"slice","data":[1.00,2.00,3.50]}"#);
}

#[test]
fn largest_precision_does_not_panic() {
    let out = encode_values(&Points::bars(vec![1.0]), u16::MAX).unwrap();
    // "[" + "1." + u16::MAX zeros + "]"
    assert_eq!(out.len(), 3 + usize::from(u16::MAX) + 1);
    assert!(out.starts_with("[1.000"));
    assert!(out.ends_with("0]"));
}

#[test]
fn output_length_matches_input() {
    for n in 0..16usize {
        let xs: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();

        let bare: serde_json::Value = serde_json::from_str(&encode_values(&xs, 2).unwrap()).unwrap();
        assert_eq!(bare.as_array().unwrap().len(), n);
        assert!(bare.as_array().unwrap().iter().all(|e| e.is_number()));

        let pts = Points::xy(xs.clone(), ys.clone());
        let xy: serde_json::Value = serde_json::from_str(&encode_values(&pts, 2).unwrap()).unwrap();
        let items = xy.as_array().unwrap();
        assert_eq!(items.len(), n);
        for (i, item) in items.iter().enumerate() {
            let obj = item.as_object().unwrap();
            assert_eq!(obj.len(), 2);
            assert_eq!(obj["x"].as_f64().unwrap(), xs[i]);
            assert_eq!(obj["y"].as_f64().unwrap(), ys[i]);
        }
    }
}

#[test]
fn non_finite_values_fail_to_encode() {
    let d = Dataset::new(vec![1.0, f64::NAN]);
    assert!(matches!(d.to_json(), Err(ChartError::Json(_))));

    let d = Dataset::new(Points::xy(vec![f64::INFINITY], vec![1.0]));
    assert!(matches!(d.to_json(), Err(ChartError::Json(_))));
}
