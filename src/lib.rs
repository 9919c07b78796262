//! gpui_trendline is a scrubbable trend-line chart widget built for GPUI.
//! The crate turns an ordered sample sequence into screen geometry, fills
//! the area under the line with a gradient, reveals the stroke with a
//! one-shot animation, and reports drag-scrub selections through a callback.

#![forbid(unsafe_code)]

pub mod animation;
pub mod compose;
pub mod data;
pub mod geom;
pub mod gpui_backend;
pub mod label;
pub mod map;
pub mod normalize;
pub mod render;
pub mod scrub;
pub mod style;

pub use animation::{Easing, Tween};
pub use compose::compose_frame;
pub use data::{ChartData, Sample};
pub use geom::{Range, ScreenOffset, ScreenPoint, ScreenSize};
pub use gpui_backend::{ChartHandle, ChartViewConfig, GpuiChartView};
pub use label::ValueFormatter;
pub use map::{chart_points, reference_line_y};
pub use normalize::{normalized, normalized_value};
pub use render::{
    Color, Gradient, LineSegment, LineStyle, MarkerStyle, RenderCommand, RenderList, close_area,
    dash_segments, trim_polyline,
};
pub use scrub::{MARKER_ANCHOR_INSET, ScrubState, TRACK_INSET, resolve_scrub_index};
pub use style::Theme;
