pub mod animation;
pub mod dataset;
mod dataset_json;
pub mod search;
pub mod ticks;
pub mod transform;
pub mod types;
pub mod visible;
pub mod window;

pub use animation::{
    AnimationStart, AnimationState, Animator, DEFAULT_ANIMATION_STEPS, interpolate_transform,
};
pub use dataset::{Dataset, Series, SeriesId};
pub use search::{
    binary_search_index, decode_search_result, encode_search_result, nearest_index,
    nearest_index_within, search_sorted,
};
pub use ticks::{IndexTick, ValueTick, index_ticks, nice_step, value_ticks};
pub use transform::{HorizontalMapping, Transform, decimation_stride};
pub use types::{ChartLayout, PlotArea, Viewport};
pub use visible::VisibleSet;
pub use window::{DragTarget, PreviewFrame, RangeWindow};
