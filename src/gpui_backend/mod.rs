//! GPUI integration for gpui_trendline.
//!
//! This module provides a GPUI view that renders a [`ChartData`](crate::data::ChartData)
//! as a scrubbable trend line: a gradient-filled area, an optional dashed
//! reference line, a reveal-animated stroke, and a drag-driven selection
//! marker.

mod config;
mod paint;
mod view;

pub use config::ChartViewConfig;
pub use view::{ChartHandle, GpuiChartView};
