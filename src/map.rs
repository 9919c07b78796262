//! Mapping normalized values into screen coordinates.

use crate::geom::{Range, ScreenPoint, ScreenSize};
use crate::normalize::{normalized, normalized_value};

/// Convert raw values into screen points for the given viewport.
///
/// Index order defines the left-to-right time axis: `x = W * i / (k - 1)`,
/// `y = (1 - n[i]) * H` with y inverted so larger values sit higher. Fewer
/// than two values produce no geometry; a single point cannot form a line.
pub fn chart_points(values: &[f64], size: ScreenSize) -> Vec<ScreenPoint> {
    if values.len() < 2 {
        return Vec::new();
    }
    let divisor = (values.len() - 1) as f64;
    let width = f64::from(size.width);
    let height = f64::from(size.height);
    normalized(values)
        .iter()
        .enumerate()
        .map(|(index, &n)| {
            let x = width * index as f64 / divisor;
            let y = (1.0 - n) * height;
            ScreenPoint::new(x as f32, y as f32)
        })
        .collect()
}

/// The reference line's height for a target value.
///
/// The target shares the dataset's normalization scale, so the line lands
/// where a data point of the same value would.
pub fn reference_line_y(target: f64, range: Range, height: f32) -> f32 {
    ((1.0 - normalized_value(target, range)) * f64::from(height)) as f32
}
