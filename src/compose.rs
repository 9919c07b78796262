//! Frame composition: data and interaction state into an ordered render list.

use crate::data::{ChartData, Sample};
use crate::geom::{ScreenPoint, ScreenSize};
use crate::map::{chart_points, reference_line_y};
use crate::render::{
    Gradient, LineStyle, MarkerStyle, RenderCommand, RenderList, close_area, dash_segments,
    trim_polyline,
};
use crate::scrub::{MARKER_ANCHOR_INSET, ScrubState};
use crate::style::Theme;

/// Dash length of the reference line, in pixels.
const REFERENCE_DASH: f32 = 5.0;

/// Compose one frame of draw commands.
///
/// Geometry is computed once and shared by every layer. Back-to-front: the
/// gradient area (always fully opaque), the dashed reference line (only with
/// a target and a value range), the stroke trimmed to `reveal_fraction`, and
/// the marker circle while a scrub is active. Degenerate viewports and
/// datasets shorter than two samples produce an empty list.
pub fn compose_frame<T: Sample>(
    data: &ChartData<T>,
    size: ScreenSize,
    scrub: &ScrubState,
    reveal_fraction: f32,
    theme: &Theme,
) -> RenderList {
    let mut render = RenderList::new();
    if !size.is_drawable() {
        return render;
    }

    let values = data.values();
    let points = chart_points(&values, size);
    if points.is_empty() {
        return render;
    }

    render.push(RenderCommand::Area {
        points: close_area(&points, size),
        gradient: Gradient {
            top: theme.fill_top,
            bottom: theme.fill_bottom,
        },
    });

    if let Some(target) = data.target()
        && let Some(range) = data.value_range()
    {
        let y = reference_line_y(target, range, size.height);
        let mut segments = Vec::new();
        dash_segments(
            ScreenPoint::new(0.0, y),
            ScreenPoint::new(size.width, y),
            REFERENCE_DASH,
            &mut segments,
        );
        render.push(RenderCommand::Segments {
            segments,
            style: LineStyle {
                color: theme.reference,
                width: 1.0,
                dash: Some(REFERENCE_DASH),
            },
        });
    }

    let stroke = trim_polyline(&points, reveal_fraction);
    if stroke.len() > 1 {
        render.push(RenderCommand::Polyline {
            points: stroke,
            style: LineStyle {
                color: theme.accent,
                width: 1.0,
                dash: None,
            },
        });
    }

    if scrub.is_scrubbing() && scrub.current_index().is_some_and(|index| index < points.len()) {
        // The marker offset is anchored to the bottom-leading corner;
        // undoing the anchor insets lands the circle on the data point.
        let offset = scrub.marker_offset();
        render.push(RenderCommand::Marker {
            center: ScreenPoint::new(offset.dx + MARKER_ANCHOR_INSET, size.height + offset.dy),
            style: MarkerStyle {
                color: theme.marker,
                diameter: 12.0,
            },
        });
    }

    render
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::ValueFormatter;

    const SIZE: ScreenSize = ScreenSize::new(130.0, 50.0);

    fn layer_names(render: &RenderList) -> Vec<&'static str> {
        render
            .commands()
            .iter()
            .map(|command| match command {
                RenderCommand::Area { .. } => "area",
                RenderCommand::Segments { .. } => "segments",
                RenderCommand::Polyline { .. } => "polyline",
                RenderCommand::Marker { .. } => "marker",
            })
            .collect()
    }

    #[test]
    fn layers_are_ordered_back_to_front() {
        let data = ChartData::from_samples([10.0, 20.0, 15.0, 30.0]).with_target(25.0);
        let mut scrub = ScrubState::new();
        let points = chart_points(&data.values(), SIZE);
        scrub.drag_update(60.0, &data.values(), &points, SIZE, &ValueFormatter::default());

        let render = compose_frame(&data, SIZE, &scrub, 1.0, &Theme::default());
        assert_eq!(
            layer_names(&render),
            vec!["area", "segments", "polyline", "marker"]
        );
    }

    #[test]
    fn reference_line_requires_target() {
        let data = ChartData::from_samples([10.0, 20.0, 15.0, 30.0]);
        let render = compose_frame(&data, SIZE, &ScrubState::new(), 1.0, &Theme::default());
        assert_eq!(layer_names(&render), vec!["area", "polyline"]);
    }

    #[test]
    fn marker_requires_active_scrub() {
        let data = ChartData::from_samples([10.0, 20.0, 15.0, 30.0]);
        let mut scrub = ScrubState::new();
        let points = chart_points(&data.values(), SIZE);
        scrub.drag_update(60.0, &data.values(), &points, SIZE, &ValueFormatter::default());
        scrub.drag_end();

        let render = compose_frame(&data, SIZE, &scrub, 1.0, &Theme::default());
        assert!(!layer_names(&render).contains(&"marker"));
    }

    #[test]
    fn short_datasets_render_nothing() {
        let empty: ChartData<f64> = ChartData::new();
        assert!(
            compose_frame(&empty, SIZE, &ScrubState::new(), 1.0, &Theme::default()).is_empty()
        );

        // A singleton stays empty even with a target set.
        let singleton = ChartData::from_samples([42.0]).with_target(40.0);
        assert!(
            compose_frame(&singleton, SIZE, &ScrubState::new(), 1.0, &Theme::default()).is_empty()
        );
    }

    #[test]
    fn degenerate_viewport_renders_nothing() {
        let data = ChartData::from_samples([1.0, 2.0]);
        let render = compose_frame(
            &data,
            ScreenSize::new(0.0, 0.0),
            &ScrubState::new(),
            1.0,
            &Theme::default(),
        );
        assert!(render.is_empty());
    }

    #[test]
    fn area_ignores_reveal_fraction() {
        let data = ChartData::from_samples([10.0, 20.0, 15.0, 30.0]);
        let render = compose_frame(&data, SIZE, &ScrubState::new(), 0.0, &Theme::default());
        // The stroke is hidden at reveal 0, the area is not.
        assert_eq!(layer_names(&render), vec!["area"]);
    }

    #[test]
    fn partial_reveal_trims_the_stroke() {
        let data = ChartData::from_samples([10.0, 20.0, 15.0, 30.0]);
        let full = compose_frame(&data, SIZE, &ScrubState::new(), 1.0, &Theme::default());
        let partial = compose_frame(&data, SIZE, &ScrubState::new(), 0.4, &Theme::default());

        let stroke_len = |render: &RenderList| {
            render
                .commands()
                .iter()
                .find_map(|command| match command {
                    RenderCommand::Polyline { points, .. } => Some(polyline_length(points)),
                    _ => None,
                })
                .unwrap_or(0.0)
        };
        let full_len = stroke_len(&full);
        let partial_len = stroke_len(&partial);
        assert!(partial_len > 0.0);
        assert!((partial_len - full_len * 0.4).abs() < 0.5);
    }

    #[test]
    fn marker_lands_on_the_selected_point() {
        let data = ChartData::from_samples([10.0, 20.0, 15.0, 30.0]);
        let points = chart_points(&data.values(), SIZE);
        let mut scrub = ScrubState::new();
        scrub.drag_update(
            SIZE.width,
            &data.values(),
            &points,
            SIZE,
            &ValueFormatter::default(),
        );
        let index = scrub.current_index().expect("index");

        let render = compose_frame(&data, SIZE, &scrub, 1.0, &Theme::default());
        let center = render
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::Marker { center, .. } => Some(*center),
                _ => None,
            })
            .expect("marker");
        assert_eq!(center, points[index]);
    }

    fn polyline_length(points: &[ScreenPoint]) -> f32 {
        points
            .windows(2)
            .map(|w| {
                let dx = w[1].x - w[0].x;
                let dy = w[1].y - w[0].y;
                (dx * dx + dy * dy).sqrt()
            })
            .sum()
    }
}
