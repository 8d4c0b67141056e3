use std::cell::RefCell;
use std::rc::Rc;

use chart_scrubber::api::{ChartEngine, ChartEngineConfig};
use chart_scrubber::core::{Dataset, DragTarget, Series, Viewport};
use chart_scrubber::extensions::{ChartEvent, ChartObserver, ObserverContext};
use chart_scrubber::interaction::{PointerEvent, Surface};
use chart_scrubber::render::{Color, NullRenderer};

#[derive(Clone)]
struct RecordingObserver {
    id: String,
    events: Rc<RefCell<Vec<(ChartEvent, ObserverContext)>>>,
}

impl RecordingObserver {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(ChartEvent, ObserverContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &ChartEvent, context: ObserverContext) {
        self.events.borrow_mut().push((event.clone(), context));
    }
}

fn event_kind(event: &ChartEvent) -> &'static str {
    match event {
        ChartEvent::DatasetLoaded { .. } => "loaded",
        ChartEvent::RangeChanged { .. } => "range",
        ChartEvent::VisibilityChanged { .. } => "visibility",
        ChartEvent::HoverIndexChanged { .. } => "hover",
        ChartEvent::HoverCleared => "hover_cleared",
        ChartEvent::GestureStarted { .. } => "gesture_start",
        ChartEvent::GestureEnded => "gesture_end",
        ChartEvent::Cleared => "cleared",
        ChartEvent::Rendered { .. } => "rendered",
        ChartEvent::ThemeChanged => "theme",
    }
}

fn dataset() -> Dataset {
    let x_values = (0..=100).map(|i| f64::from(i) * 10.0).collect();
    let y0 = (0..=100).map(f64::from).collect();
    Dataset::new(
        x_values,
        vec![Series::new("y0", "Joined", Color::rgb8(0x3d, 0xc2, 0x3f), y0)],
    )
    .expect("valid dataset")
}

type Events = Rc<RefCell<Vec<(ChartEvent, ObserverContext)>>>;

fn observed_engine() -> (ChartEngine<NullRenderer>, Events) {
    let config = ChartEngineConfig::new(Viewport::new(800, 500));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_observer(Box::new(RecordingObserver::new("recorder", events.clone())))
        .expect("register observer");
    (engine, events)
}

fn kinds(events: &Events) -> Vec<&'static str> {
    events.borrow().iter().map(|(event, _)| event_kind(event)).collect()
}

#[test]
fn load_and_range_change_emit_ordered_events() {
    let (mut engine, events) = observed_engine();
    engine.load(dataset()).expect("load");
    assert_eq!(kinds(&events), vec!["loaded", "rendered"]);
    assert_eq!(
        events.borrow()[0].0,
        ChartEvent::DatasetLoaded {
            samples: 101,
            series: 1
        }
    );

    events.borrow_mut().clear();
    engine.set_range(10, 50).expect("set range");
    while engine.tick().expect("tick") {}

    let recorded = events.borrow();
    assert_eq!(recorded[0].0, ChartEvent::RangeChanged { begin: 10, end: 50 });
    assert_eq!(recorded.len(), 11);
    assert_eq!(recorded[1].0, ChartEvent::Rendered { animating: true });
    assert_eq!(recorded[10].0, ChartEvent::Rendered { animating: false });
    assert!(recorded[1].1.animating);
}

#[test]
fn hover_and_leave_reach_tooltip_collaborator() {
    let (mut engine, events) = observed_engine();
    engine.load(dataset()).expect("load");
    events.borrow_mut().clear();

    let x = engine
        .main_transform()
        .expect("main transform")
        .x_to_pixel(800.0);
    engine.hover_at(x).expect("hover");
    engine.hover_leave().expect("leave");

    assert_eq!(
        kinds(&events),
        vec!["hover", "rendered", "hover_cleared", "rendered"]
    );
    assert_eq!(events.borrow()[0].0, ChartEvent::HoverIndexChanged { index: 80 });
    assert_eq!(events.borrow()[0].1.hover_index, Some(80));
}

#[test]
fn toggling_off_last_series_reports_cleared_surface() {
    let (mut engine, events) = observed_engine();
    engine.load(dataset()).expect("load");
    events.borrow_mut().clear();

    engine.toggle_series("y0").expect("toggle");
    assert_eq!(kinds(&events), vec!["visibility", "cleared"]);
    assert_eq!(events.borrow()[1].1.visible_count, 0);
}

#[test]
fn main_pointer_on_cleared_surface_emits_nothing() {
    let (mut engine, events) = observed_engine();
    engine.load(dataset()).expect("load");
    engine.toggle_series("y0").expect("toggle");
    engine.set_range(10, 40).expect("set range");
    events.borrow_mut().clear();

    engine
        .on_pointer_event(Surface::Main, PointerEvent::moved(100.0, 120.0))
        .expect("main move");
    assert!(kinds(&events).is_empty());
}

#[test]
fn preview_gesture_is_bracketed_by_start_and_end() {
    let (mut engine, events) = observed_engine();
    engine.load(dataset()).expect("load");
    engine.set_range(10, 50).expect("set range");
    events.borrow_mut().clear();

    let end_px = engine.preview_frame().expect("frame").x1;
    engine
        .on_pointer_event(Surface::Preview, PointerEvent::down(end_px, 470.0))
        .expect("press");
    engine
        .on_pointer_event(Surface::Preview, PointerEvent::up(end_px + 80.0, 470.0))
        .expect("release");

    let recorded = kinds(&events);
    assert_eq!(recorded.first(), Some(&"gesture_start"));
    assert_eq!(recorded.last(), Some(&"gesture_end"));
    assert!(recorded.contains(&"range"));
    assert_eq!(
        events.borrow()[0].0,
        ChartEvent::GestureStarted {
            target: DragTarget::EndHandle
        }
    );
}

#[test]
fn duplicate_or_empty_observer_ids_are_rejected() {
    let (mut engine, events) = observed_engine();
    assert!(
        engine
            .register_observer(Box::new(RecordingObserver::new("recorder", events.clone())))
            .is_err()
    );
    assert!(
        engine
            .register_observer(Box::new(RecordingObserver::new("", events.clone())))
            .is_err()
    );
    assert_eq!(engine.observer_count(), 1);
    assert!(engine.has_observer("recorder"));

    assert!(engine.unregister_observer("recorder"));
    assert!(!engine.unregister_observer("recorder"));
    assert_eq!(engine.observer_count(), 0);

    engine.load(dataset()).expect("load");
    assert!(events.borrow().is_empty());
}
