use approx::assert_relative_eq;
use chart_scrubber::core::{Dataset, PlotArea, Series, Transform, VisibleSet, decimation_stride};
use chart_scrubber::render::Color;

fn dataset(values: &[(&str, Vec<f64>)]) -> Dataset {
    let len = values.first().map_or(0, |(_, v)| v.len());
    let x_values = (0..len).map(|i| i as f64 * 10.0).collect();
    let series = values
        .iter()
        .map(|(id, v)| Series::new(*id, *id, Color::rgb(0.2, 0.4, 0.6), v.clone()))
        .collect();
    Dataset::new(x_values, series).expect("valid dataset")
}

fn area() -> PlotArea {
    PlotArea::new(0.0, 400.0, 300.0)
}

#[test]
fn window_edges_map_to_view_edges() {
    let data = dataset(&[("y0", vec![5.0, 10.0, 20.0, 15.0, 40.0])]);
    let visible = VisibleSet::all(&data);
    let transform = Transform::compute(&data, &visible, 1, 3, area())
        .expect("compute")
        .expect("visible transform");

    assert_relative_eq!(transform.x_to_pixel(10.0), 0.0, epsilon = 1e-9);
    assert_relative_eq!(transform.x_to_pixel(30.0), 400.0, epsilon = 1e-9);
    assert_relative_eq!(transform.y_to_pixel(transform.max_y), 0.0, epsilon = 1e-9);
    assert_relative_eq!(transform.y_to_pixel(transform.min_y), 300.0, epsilon = 1e-9);
    assert_eq!((transform.begin, transform.end), (1, 3));
}

#[test]
fn value_range_covers_window_and_zero() {
    let data = dataset(&[
        ("y0", vec![5.0, 10.0, 20.0, 15.0, 40.0]),
        ("y1", vec![-3.0, 2.0, 1.0, 4.0, 100.0]),
    ]);
    let visible = VisibleSet::all(&data);
    let transform = Transform::compute(&data, &visible, 0, 3, area())
        .expect("compute")
        .expect("visible transform");

    assert_eq!(transform.min_y, -3.0);
    assert_eq!(transform.max_y, 20.0);
    assert!(transform.y_ratio < 0.0);
}

#[test]
fn strictly_positive_values_still_include_zero() {
    let data = dataset(&[("y0", vec![50.0, 60.0, 70.0])]);
    let visible = VisibleSet::all(&data);
    let transform = Transform::compute(&data, &visible, 0, 2, area())
        .expect("compute")
        .expect("visible transform");

    assert_eq!(transform.min_y, 0.0);
    assert_eq!(transform.max_y, 70.0);
}

#[test]
fn hidden_series_do_not_widen_the_value_range() {
    let data = dataset(&[
        ("y0", vec![1.0, 2.0, 3.0]),
        ("y1", vec![1_000.0, 2_000.0, 3_000.0]),
    ]);
    let mut visible = VisibleSet::all(&data);
    visible.remove("y1");
    let transform = Transform::compute(&data, &visible, 0, 2, area())
        .expect("compute")
        .expect("visible transform");

    assert_eq!(transform.max_y, 3.0);
}

#[test]
fn all_zero_values_use_unit_range() {
    let data = dataset(&[("y0", vec![0.0, 0.0, 0.0])]);
    let visible = VisibleSet::all(&data);
    let transform = Transform::compute(&data, &visible, 0, 2, area())
        .expect("compute")
        .expect("visible transform");

    assert_eq!(transform.min_y, 0.0);
    assert_eq!(transform.max_y, 1.0);
    assert!(transform.y_ratio.is_finite());
}

#[test]
fn empty_visible_set_yields_no_transform() {
    let data = dataset(&[("y0", vec![1.0, 2.0, 3.0])]);
    let transform =
        Transform::compute(&data, &VisibleSet::default(), 0, 2, area()).expect("compute");
    assert!(transform.is_none());
}

#[test]
fn invalid_window_is_rejected() {
    let data = dataset(&[("y0", vec![1.0, 2.0, 3.0])]);
    let visible = VisibleSet::all(&data);
    assert!(Transform::compute(&data, &visible, 2, 2, area()).is_err());
    assert!(Transform::compute(&data, &visible, 0, 3, area()).is_err());
    assert!(Transform::compute(&data, &visible, 0, 2, PlotArea::new(0.0, 0.0, 10.0)).is_err());
}

#[test]
fn area_top_offsets_pixel_rows() {
    let data = dataset(&[("y0", vec![0.0, 10.0])]);
    let visible = VisibleSet::all(&data);
    let transform = Transform::compute(&data, &visible, 0, 1, PlotArea::new(450.0, 100.0, 50.0))
        .expect("compute")
        .expect("visible transform");

    assert_relative_eq!(transform.y_to_pixel(10.0), 450.0, epsilon = 1e-9);
    assert_relative_eq!(transform.y_to_pixel(0.0), 500.0, epsilon = 1e-9);
}

#[test]
fn pixel_round_trip_recovers_data_point() {
    let data = dataset(&[("y0", vec![-8.0, 3.0, 12.0, 7.0])]);
    let visible = VisibleSet::all(&data);
    let transform = Transform::compute(&data, &visible, 0, 3, area())
        .expect("compute")
        .expect("visible transform");

    let (px, py) = transform.to_pixel(17.5, 4.25);
    let (x, y) = transform.to_data(px, py);
    assert_relative_eq!(x, 17.5, epsilon = 1e-9);
    assert_relative_eq!(y, 4.25, epsilon = 1e-9);
}

#[test]
fn plotted_indices_always_end_on_window_end() {
    let values = (0..1_001).map(|i| i as f64).collect::<Vec<_>>();
    let data = dataset(&[("y0", values)]);
    let visible = VisibleSet::all(&data);
    let transform = Transform::compute(&data, &visible, 3, 1_000, PlotArea::new(0.0, 350.0, 100.0))
        .expect("compute")
        .expect("visible transform");

    assert_eq!(transform.x_step, decimation_stride(3, 1_000, 350.0));
    assert_eq!(transform.x_step, 2);
    let indices = transform.plotted_indices().collect::<Vec<_>>();
    assert_eq!(indices.first(), Some(&3));
    assert_eq!(indices.last(), Some(&1_000));
    assert_eq!(indices[1] - indices[0], 2);
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
}
