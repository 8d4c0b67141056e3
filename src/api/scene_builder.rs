use crate::core::{
    ChartLayout, Dataset, PlotArea, PreviewFrame, SeriesId, Transform, Viewport, VisibleSet,
    index_ticks, value_ticks,
};
use crate::render::{
    ChartView, CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    Theme, ViewScene,
};

use super::ChartEngineConfig;

const PREVIEW_HANDLE_WIDTH_PX: f64 = 5.0;
const PREVIEW_BORDER_PX: f64 = 1.0;
const GRID_LINE_WIDTH_PX: f64 = 1.0;
const HOVER_RULER_WIDTH_PX: f64 = 1.0;
const HOVER_MARKER_RADIUS_PX: f64 = 5.0;
const HOVER_MARKER_STROKE_PX: f64 = 3.0;

pub(super) struct SceneInput<'a> {
    pub(super) dataset: &'a Dataset,
    pub(super) visible: &'a VisibleSet,
    pub(super) layout: ChartLayout,
    pub(super) viewport: Viewport,
    pub(super) theme: Theme,
    pub(super) config: ChartEngineConfig,
    pub(super) main: Transform,
    pub(super) preview: Transform,
    pub(super) preview_frame: PreviewFrame,
    pub(super) hover_index: Option<usize>,
}

pub(super) fn build_frame(input: &SceneInput<'_>) -> RenderFrame {
    let visible = input.visible.ordered_by(input.dataset);
    let mut frame = RenderFrame::cleared(input.viewport, input.theme.background);

    push_grid(&mut frame, input);
    push_preview_controls(
        &mut frame.rects,
        input.layout.preview,
        input.preview_frame,
        input.theme,
    );
    push_hover(&mut frame, input, &visible);

    frame.main = Some(view_scene(
        ChartView::Main,
        input.layout.main,
        input.main,
        &visible,
        input.dataset,
        input.config.main_line_width,
    ));
    frame.preview = Some(view_scene(
        ChartView::Preview,
        input.layout.preview,
        input.preview,
        &visible,
        input.dataset,
        input.config.preview_line_width,
    ));
    frame
}

fn view_scene(
    view: ChartView,
    area: PlotArea,
    transform: Transform,
    visible: &[SeriesId],
    dataset: &Dataset,
    line_width: f64,
) -> ViewScene {
    let x_values = dataset.x_values();
    let series_paths = visible
        .iter()
        .filter_map(|id| dataset.series_by_id(id.as_str()))
        .map(|series| {
            let points = transform
                .plotted_indices()
                .take_while(|index| *index < x_values.len())
                .map(|index| transform.to_pixel(x_values[index], series.values[index]))
                .collect();
            PolylinePrimitive::new(points, line_width, series.color)
        })
        .collect();

    ViewScene {
        view,
        area,
        transform,
        visible: visible.to_vec(),
        series_paths,
    }
}

fn push_grid(frame: &mut RenderFrame, input: &SceneInput<'_>) {
    let slots = input.config.main_label_count;
    let width = input.layout.main.width;

    for tick in value_ticks(&input.main, slots) {
        let color = if tick.value == 0.0 {
            input.theme.zero_line
        } else {
            input.theme.grid_line
        };
        frame.lines.push(LinePrimitive::new(
            0.0,
            tick.pixel_y,
            width,
            tick.pixel_y,
            GRID_LINE_WIDTH_PX,
            color,
        ));
        frame.value_ticks.push(tick);
    }
    frame.index_ticks = index_ticks(&input.main, input.dataset.x_values(), slots);
}

/// Mask outside the frame, 5px handles on both edges and 1px borders
/// between them.
fn push_preview_controls(
    rects: &mut Vec<RectPrimitive>,
    area: PlotArea,
    frame: PreviewFrame,
    theme: Theme,
) {
    let x0 = frame.x0.clamp(0.0, area.width);
    let x1 = frame.x1.clamp(x0, area.width);

    if x0 > 0.0 {
        rects.push(RectPrimitive::new(
            0.0,
            area.top,
            x0,
            area.height,
            theme.preview_mask,
        ));
    }
    if x1 < area.width {
        rects.push(RectPrimitive::new(
            x1,
            area.top,
            area.width - x1,
            area.height,
            theme.preview_mask,
        ));
    }

    let handle = PREVIEW_HANDLE_WIDTH_PX.min((x1 - x0) / 2.0);
    rects.push(RectPrimitive::new(
        x0,
        area.top,
        handle,
        area.height,
        theme.preview_frame,
    ));
    rects.push(RectPrimitive::new(
        x1 - handle,
        area.top,
        handle,
        area.height,
        theme.preview_frame,
    ));

    let inner = x1 - x0 - 2.0 * handle;
    if inner > 0.0 {
        rects.push(RectPrimitive::new(
            x0 + handle,
            area.top,
            inner,
            PREVIEW_BORDER_PX,
            theme.preview_frame,
        ));
        rects.push(RectPrimitive::new(
            x0 + handle,
            area.bottom() - PREVIEW_BORDER_PX,
            inner,
            PREVIEW_BORDER_PX,
            theme.preview_frame,
        ));
    }
}

/// Vertical ruler through the hovered sample plus one marker per series.
fn push_hover(frame: &mut RenderFrame, input: &SceneInput<'_>, visible: &[SeriesId]) {
    let Some(index) = input.hover_index else {
        return;
    };
    let main = &input.main;
    let x_values = input.dataset.x_values();
    if index < main.begin || index > main.end || index >= x_values.len() {
        return;
    }

    let x = x_values[index];
    let (pixel_x, top) = main.to_pixel(x, main.max_y);
    let bottom = main.y_to_pixel(main.min_y);
    frame.lines.push(LinePrimitive::new(
        pixel_x,
        bottom,
        pixel_x,
        top,
        HOVER_RULER_WIDTH_PX,
        input.theme.hover_ruler,
    ));

    for series in visible
        .iter()
        .filter_map(|id| input.dataset.series_by_id(id.as_str()))
    {
        let (cx, cy) = main.to_pixel(x, series.values[index]);
        frame.circles.push(CirclePrimitive {
            x: cx,
            y: cy,
            radius: HOVER_MARKER_RADIUS_PX,
            stroke_width: HOVER_MARKER_STROKE_PX,
            stroke_color: series.color,
            fill_color: input.theme.background,
        });
    }
    frame.hover_index = Some(index);
}
