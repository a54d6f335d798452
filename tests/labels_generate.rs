use chartaxis::labels::{
    AxisLabels, MAX_LABEL_COUNT, NumberLocale, display_order, label_values, labels,
};
use chartaxis::{ChartError, ResolvedRange};

const TOL: f64 = 1e-9;

fn numeric(count: usize, specifier: &str) -> AxisLabels {
    AxisLabels::Numeric {
        count,
        specifier: specifier.into(),
    }
}

#[test]
fn values_span_the_full_range_ascending() {
    let range = ResolvedRange::from_bounds(0.0, 5.0);
    for count in 2..=12 {
        let vals = label_values(&range, count).unwrap();
        assert_eq!(vals.len(), count);
        assert_eq!(vals[0], range.min_value);
        assert!((vals[count - 1] - (range.min_value + range.span)).abs() < TOL);
        assert!(vals.windows(2).all(|w| w[0] < w[1]), "ascending for {count}");
    }
}

#[test]
fn values_respect_negative_minimum() {
    let range = ResolvedRange::from_bounds(-10.0, 10.0);
    let vals = label_values(&range, 3).unwrap();
    assert_eq!(vals[0], -10.0);
    assert!((vals[1] - 0.0005).abs() < TOL);
    assert!((vals[2] - 10.001).abs() < TOL);
}

#[test]
fn count_below_two_is_rejected() {
    let range = ResolvedRange::from_bounds(0.0, 1.0);
    for count in [0, 1] {
        assert!(matches!(
            label_values(&range, count),
            Err(ChartError::InvalidLabelCount { count: c }) if c == count
        ));
        assert!(labels(&range, &numeric(count, "%.0f"), &NumberLocale::default()).is_err());
    }
}

#[test]
fn count_above_cap_is_rejected() {
    let range = ResolvedRange::from_bounds(0.0, 1.0);
    assert_eq!(label_values(&range, MAX_LABEL_COUNT).unwrap().len(), MAX_LABEL_COUNT);
    for count in [MAX_LABEL_COUNT + 1, 1_000_000_000_000] {
        assert!(matches!(
            label_values(&range, count),
            Err(ChartError::InvalidLabelCount { count: c }) if c == count
        ));
    }

    let huge = chartaxis::style::ChartStyle::from_json_str(
        r#"{"axis_labels": {"numeric": {"count": 1000000000000, "specifier": "%.0f"}}}"#,
    )
    .unwrap();
    assert!(matches!(
        labels(&range, &huge.axis_labels, &NumberLocale::default()),
        Err(ChartError::InvalidLabelCount { .. })
    ));
}

#[test]
fn numeric_labels_are_formatted_with_specifier() {
    let range = ResolvedRange::from_bounds(0.0, 100.0);
    let got = labels(&range, &numeric(5, "%.0f"), &NumberLocale::default()).unwrap();
    assert_eq!(got, vec!["0", "25", "50", "75", "100"]);

    let got = labels(&range, &numeric(3, "%.2f"), &NumberLocale::default()).unwrap();
    assert_eq!(got, vec!["0.00", "50.00", "100.00"]);
}

#[test]
fn numeric_labels_use_locale_grouping() {
    let range = ResolvedRange::from_bounds(0.0, 20000.0);
    let got = labels(&range, &numeric(3, "%,.0f"), &NumberLocale::from_tag("de")).unwrap();
    assert_eq!(got, vec!["0", "10.000", "20.000"]);
}

#[test]
fn bad_specifier_surfaces_an_error() {
    let range = ResolvedRange::from_bounds(0.0, 1.0);
    assert!(matches!(
        labels(&range, &numeric(3, "%d"), &NumberLocale::default()),
        Err(ChartError::InvalidSpecifier { .. })
    ));
}

#[test]
fn custom_labels_pass_through_verbatim() {
    let range = ResolvedRange::from_bounds(0.0, 1.0);
    let custom = vec!["Low".to_string(), "".to_string(), "High  ".to_string()];
    let got = labels(
        &range,
        &AxisLabels::Custom(Some(custom.clone())),
        &NumberLocale::default(),
    )
    .unwrap();
    assert_eq!(got, custom);
}

#[test]
fn missing_custom_labels_render_nothing() {
    let range = ResolvedRange::from_bounds(0.0, 1.0);
    let got = labels(&range, &AxisLabels::Custom(None), &NumberLocale::default()).unwrap();
    assert!(got.is_empty());
}

#[test]
fn display_order_puts_highest_first() {
    let asc = vec!["0".to_string(), "5".to_string(), "10".to_string()];
    assert_eq!(display_order(&asc), vec!["10", "5", "0"]);
}
