//! Value normalization into the unit interval.

use crate::geom::Range;

const DEGENERATE_MIDPOINT: f64 = 0.5;

/// Rescale values into [0, 1] using the slice's own min/max.
///
/// All-equal data maps to the midpoint so a flat series still renders at
/// mid-height instead of dividing by zero. An empty slice yields an empty
/// vector.
pub fn normalized(values: &[f64]) -> Vec<f64> {
    let Some(range) = Range::from_values(values) else {
        return Vec::new();
    };
    values
        .iter()
        .map(|&value| normalized_value(value, range))
        .collect()
}

/// Rescale a single value against an existing range.
///
/// Used for the reference line, which shares the dataset's scale. The result
/// is not clamped; targets outside the data range map outside [0, 1].
pub fn normalized_value(value: f64, range: Range) -> f64 {
    let span = range.span();
    if span <= 0.0 {
        return DEGENERATE_MIDPOINT;
    }
    (value - range.min) / span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_maps_min_to_zero_and_max_to_one() {
        let result = normalized(&[10.0, 20.0, 15.0, 30.0]);
        assert_eq!(result[0], 0.0);
        assert_eq!(result[3], 1.0);
        assert!((result[1] - 0.5).abs() < 1e-12);
        assert!((result[2] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn normalized_stays_in_unit_interval() {
        let result = normalized(&[-3.0, 7.0, 0.0, 2.5, 7.0]);
        assert!(result.iter().all(|&n| (0.0..=1.0).contains(&n)));
    }

    #[test]
    fn all_equal_values_map_to_midpoint() {
        let result = normalized(&[4.0, 4.0, 4.0]);
        assert_eq!(result, vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalized(&[]).is_empty());
    }

    #[test]
    fn target_outside_range_maps_outside_unit_interval() {
        let range = Range::new(10.0, 30.0);
        assert!(normalized_value(40.0, range) > 1.0);
        assert!(normalized_value(0.0, range) < 0.0);
    }
}
