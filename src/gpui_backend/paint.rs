use gpui::{
    BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Point, Window, linear_color_stop,
    linear_gradient, point, px, quad,
};

use crate::geom::ScreenPoint;
use crate::render::{
    Color, Gradient, LineSegment, LineStyle, MarkerStyle, RenderCommand, RenderList,
};

/// Replay a render list into the window.
///
/// Commands are in element-local coordinates; `origin` translates them to
/// the element's window position.
pub(crate) fn paint_frame(frame: &RenderList, origin: Point<Pixels>, window: &mut Window) {
    for command in frame.commands() {
        match command {
            RenderCommand::Area { points, gradient } => {
                paint_area(window, origin, points, *gradient);
            }
            RenderCommand::Segments { segments, style } => {
                paint_segments(window, origin, segments, *style);
            }
            RenderCommand::Polyline { points, style } => {
                paint_polyline(window, origin, points, *style);
            }
            RenderCommand::Marker { center, style } => {
                paint_marker(window, origin, *center, *style);
            }
        }
    }
}

fn paint_area(
    window: &mut Window,
    origin: Point<Pixels>,
    points: &[ScreenPoint],
    gradient: Gradient,
) {
    if points.len() < 3 {
        return;
    }
    let mut builder = PathBuilder::fill();
    builder.move_to(to_point(origin, points[0]));
    for pt in &points[1..] {
        builder.line_to(to_point(origin, *pt));
    }
    builder.close();
    if let Ok(path) = builder.build() {
        window.paint_path(
            path,
            linear_gradient(
                0.0,
                linear_color_stop(to_hsla(gradient.bottom), 0.0),
                linear_color_stop(to_hsla(gradient.top), 1.0),
            ),
        );
    }
}

fn paint_segments(
    window: &mut Window,
    origin: Point<Pixels>,
    segments: &[LineSegment],
    style: LineStyle,
) {
    if segments.is_empty() {
        return;
    }
    let width = style.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    for segment in segments {
        builder.move_to(to_point(origin, segment.start));
        builder.line_to(to_point(origin, segment.end));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_polyline(
    window: &mut Window,
    origin: Point<Pixels>,
    points: &[ScreenPoint],
    style: LineStyle,
) {
    if points.len() < 2 {
        return;
    }
    let width = style.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    builder.move_to(to_point(origin, points[0]));
    for pt in &points[1..] {
        builder.line_to(to_point(origin, *pt));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_marker(
    window: &mut Window,
    origin: Point<Pixels>,
    center: ScreenPoint,
    style: MarkerStyle,
) {
    let radius = (style.diameter * 0.5).max(1.0);
    let center = to_point(origin, center);
    let bounds = Bounds::from_corners(
        point(center.x - px(radius), center.y - px(radius)),
        point(center.x + px(radius), center.y + px(radius)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(style.color),
        Edges::all(px(0.0)),
        to_rgba(style.color),
        BorderStyle::default(),
    ));
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_point(origin: Point<Pixels>, pt: ScreenPoint) -> Point<Pixels> {
    point(origin.x + px(pt.x), origin.y + px(pt.y))
}
