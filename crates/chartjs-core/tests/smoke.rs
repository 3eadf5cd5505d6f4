// File: crates/chartjs-core/tests/smoke.rs
// Purpose: End-to-end chart serialization: nesting, error propagation, determinism, writer output.

use chartjs_core::{
    Axis, AxisType, Chart, ChartError, ChartType, Dataset, JsonOptions, Points, Rgba, ShapeError,
};

fn line_chart() -> Chart {
    let mut chart = Chart::new(ChartType::Line);
    chart.add_dataset(Dataset::new(Points::xy(vec![1.0, 2.0], vec![3.0, 4.0])));
    chart.add_x_axis(Axis::new(AxisType::Linear));
    chart.add_y_axis(Axis::new(AxisType::Linear).with_display(true));
    chart
}

#[test]
fn line_chart_end_to_end() {
    let json = line_chart().to_json().expect("serialize");
    assert_eq!(
        json,
        concat!(
            r#"{"type":"line","data":{"datasets":[{"data":[{"x":1.00,"y":3.00},{"x":2.00,"y":4.00}]}],"labels":[]},"#,
            r#""options":{"scales":{"xAxes":[{"type":"linear"}],"yAxes":[{"type":"linear","display":true}]}}}"#
        )
    );

    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["data"]["datasets"][0]["data"], serde_json::json!([{"x": 1.0, "y": 3.0}, {"x": 2.0, "y": 4.0}]));
    assert_eq!(v["options"]["scales"]["yAxes"][0]["display"], serde_json::json!(true));
}

#[test]
fn empty_chart_keeps_data_arrays() {
    let json = Chart::new(ChartType::Bar).to_json().unwrap();
    assert_eq!(json, r#"{"type":"bar","data":{"datasets":[],"labels":[]}}"#);
}

#[test]
fn dataset_fields() {
    let d = Dataset::new(Points::bars(vec![1.0, 2.0]))
        .with_type(ChartType::Bar)
        .with_background_color(Rgba::new(255, 0, 0, 128))
        .with_label("counts")
        .with_fill(false)
        .with_line_tension(0.0)
        .with_point_radius(3.0)
        .with_show_line(true)
        .with_span_gaps(false);
    assert_eq!(
        d.to_json().unwrap(),
        concat!(
            r#"{"type":"bar","backgroundColor":"rgba(255, 0, 0, 0.502)","label":"counts","fill":false,"#,
            r#""lineTension":0.0,"pointRadius":3.0,"showLine":true,"spanGaps":false,"data":[1.00,2.00]}"#
        )
    );
}

#[test]
fn shape_error_fails_whole_chart() {
    let mut chart = line_chart();
    chart.add_dataset(Dataset::new(Points::xy(vec![1.0, 2.0, 3.0], vec![1.0])).with_label("broken"));

    match chart.to_json() {
        Err(ChartError::Shape(e)) => assert_eq!(e, ShapeError::XyLength { xs: 3, ys: 1 }),
        other => panic!("expected shape error, got {other:?}"),
    }

    let mut out = Vec::new();
    assert!(chart.write_json(&mut out, &JsonOptions::default()).is_err());
    assert!(out.is_empty(), "no partial output on error");
}

#[test]
fn serialization_is_idempotent() {
    let chart = line_chart();
    assert_eq!(chart.to_json().unwrap(), chart.to_json().unwrap());
}

#[test]
fn axes_keep_insertion_order() {
    let mut chart = Chart::new(ChartType::Line);
    chart.add_y_axis(Axis::new(AxisType::Linear).with_id("a"));
    chart.add_y_axis(Axis::new(AxisType::Log).with_id("b"));
    chart.options.scales.add_y(Axis::new(AxisType::Linear).with_id("a"));
    let v: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
    let ids: Vec<&str> = v["options"]["scales"]["yAxes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["a", "b", "a"]);
    assert!(v["options"]["scales"].get("xAxes").is_none());
}

#[test]
fn writer_and_pretty_output_match_compact() {
    let mut chart = line_chart().with_label("demo");
    chart.add_label("first");
    let compact = chart.to_json().unwrap();

    let mut buf = Vec::new();
    chart.write_json(&mut buf, &JsonOptions::default()).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), compact);

    let pretty = chart.to_json_with(&JsonOptions::default().pretty()).unwrap();
    assert!(pretty.contains('\n'));
    let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
    assert_eq!(a["label"], "demo");
    assert_eq!(a["data"]["labels"], serde_json::json!(["first"]));
}

#[test]
fn precision_option_reaches_datasets() {
    let chart = line_chart();
    let json = chart.to_json_with(&JsonOptions::default().with_precision(1)).unwrap();
    assert!(json.contains(r#""data":[{"x":1.0,"y":3.0},{"x":2.0,"y":4.0}]"#));
}
