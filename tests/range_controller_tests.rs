use chart_scrubber::api::RangeController;
use chart_scrubber::core::{Dataset, HorizontalMapping, RangeWindow, Series, SeriesId};
use chart_scrubber::render::Color;

fn dataset(samples: usize) -> Dataset {
    let x_values = (0..samples).map(|i| i as f64 * 10.0).collect();
    let series = ["y0", "y1"]
        .into_iter()
        .map(|id| {
            Series::new(
                id,
                format!("Series {id}"),
                Color::rgb(0.1, 0.5, 0.9),
                (0..samples).map(|i| i as f64).collect(),
            )
        })
        .collect();
    Dataset::new(x_values, series).expect("valid dataset")
}

#[test]
fn initial_window_is_last_quarter_with_everything_visible() {
    let data = dataset(101);
    let controller = RangeController::new(&data, 2);

    assert_eq!(controller.total(), 100);
    assert_eq!(controller.window(), RangeWindow { begin: 75, end: 100 });
    assert_eq!(controller.visible().len(), 2);
}

#[test]
fn tiny_dataset_still_gets_a_valid_window() {
    let data = dataset(2);
    let controller = RangeController::new(&data, 2);
    assert_eq!(controller.window(), RangeWindow { begin: 0, end: 1 });
}

#[test]
fn set_range_clamps_out_of_bounds_requests() {
    let data = dataset(101);
    let mut controller = RangeController::new(&data, 2);

    assert!(controller.set_range(10, 500));
    assert_eq!(controller.window(), RangeWindow { begin: 10, end: 100 });

    assert!(controller.set_range(400, 500));
    assert_eq!(controller.window(), RangeWindow { begin: 98, end: 100 });
}

#[test]
fn inverted_range_collapses_to_minimum_width() {
    let data = dataset(101);
    let mut controller = RangeController::new(&data, 5);

    controller.set_range(40, 20);
    assert_eq!(controller.window(), RangeWindow { begin: 40, end: 45 });
}

#[test]
fn unchanged_range_reports_no_change() {
    let data = dataset(101);
    let mut controller = RangeController::new(&data, 2);
    assert!(!controller.set_range(75, 100));
}

#[test]
fn visibility_changes_report_only_real_transitions() {
    let data = dataset(11);
    let mut controller = RangeController::new(&data, 2);
    let y0 = SeriesId::from("y0");

    assert!(!controller.set_visible(&y0, true));
    assert!(controller.set_visible(&y0, false));
    assert!(!controller.set_visible(&y0, false));
    assert!(controller.toggle(&y0));
    assert!(controller.visible().contains("y0"));
}

#[test]
fn preview_frame_follows_window_in_pixels() {
    let data = dataset(101);
    let mut controller = RangeController::new(&data, 2);
    let mapping = HorizontalMapping::for_window(data.x_values(), 0, 100, 800.0).expect("mapping");

    controller.set_range(25, 50);
    controller.sync_preview_frame(data.x_values(), mapping);
    let frame = controller.preview_frame();
    assert!((frame.x0 - 200.0).abs() < 1e-9);
    assert!((frame.x1 - 400.0).abs() < 1e-9);
}

#[test]
fn window_contains_is_inclusive() {
    let window = RangeWindow { begin: 3, end: 7 };
    assert!(window.contains(3));
    assert!(window.contains(7));
    assert!(!window.contains(8));
    assert_eq!(window.len(), 4);
}
