//! Scrub interaction: resolving drag positions to data indices.
//!
//! The resolver is a pure function; [`ScrubState`] owns the transient
//! interaction state and decides when the host's selection callback fires.

use crate::geom::{ScreenOffset, ScreenPoint, ScreenSize};
use crate::label::ValueFormatter;

/// Left inset compensating the marker's visual anchor, in pixels.
pub const MARKER_ANCHOR_INSET: f32 = 40.0;

/// Combined left/right insets of the interactive track, in pixels.
pub const TRACK_INSET: f32 = 90.0;

/// Rounding bias correcting for the track insets.
const INDEX_BIAS: f32 = 1.0;

/// Resolve a view-local horizontal drag position to a data index.
///
/// The index is clamped to `[0, sample_count - 1]` for any position,
/// including positions left of the anchor inset, past the track width, or
/// over a degenerate track (`width <= 90`); the saturating float-to-int
/// conversion keeps the clamp total. Returns `None` when fewer than two
/// samples exist, matching the no-geometry guard.
pub fn resolve_scrub_index(position_x: f32, sample_count: usize, width: f32) -> Option<usize> {
    if sample_count < 2 {
        return None;
    }
    let data_count = (sample_count - 1) as i64;
    let translation = position_x - MARKER_ANCHOR_INSET;
    let track = width - TRACK_INSET;
    let raw = (((translation / track) * data_count as f32).round() + INDEX_BIAS) as i64;
    Some(raw.min(data_count).max(0) as usize)
}

/// Transient scrub state owned by the chart view.
///
/// `is_scrubbing` flips on drag updates and off on drag end; the resolved
/// index and label persist after the gesture until the next interaction.
#[derive(Debug, Clone, Default)]
pub struct ScrubState {
    is_scrubbing: bool,
    current_index: Option<usize>,
    current_label: Option<String>,
    marker_offset: ScreenOffset,
}

impl ScrubState {
    /// Create an idle scrub state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag gesture is in progress.
    pub fn is_scrubbing(&self) -> bool {
        self.is_scrubbing
    }

    /// The most recently resolved data index.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The label for the most recently resolved value.
    pub fn current_label(&self) -> Option<&str> {
        self.current_label.as_deref()
    }

    /// The marker translation relative to the chart's bottom-leading corner.
    pub fn marker_offset(&self) -> ScreenOffset {
        self.marker_offset
    }

    /// Apply a drag update at a view-local horizontal position.
    ///
    /// Returns the resolved index when the selection changed and the host
    /// should invoke its callback; repeated updates resolving to the same
    /// label return `None`. Short datasets (`points.len() < 2`) are ignored
    /// entirely, leaving the state untouched.
    pub fn drag_update(
        &mut self,
        position_x: f32,
        values: &[f64],
        points: &[ScreenPoint],
        size: ScreenSize,
        formatter: &ValueFormatter,
    ) -> Option<usize> {
        if points.len() < 2 || points.len() != values.len() {
            return None;
        }
        let index = resolve_scrub_index(position_x, values.len(), size.width)?;
        let label = formatter.format(values[index]);
        let changed = self.current_label.as_deref() != Some(label.as_str());

        self.is_scrubbing = true;
        self.current_index = Some(index);
        self.current_label = Some(label);
        self.marker_offset = ScreenOffset::new(
            points[index].x - MARKER_ANCHOR_INSET,
            points[index].y - size.height,
        );

        changed.then_some(index)
    }

    /// End the drag gesture.
    ///
    /// Returns `true` exactly once per active gesture; the host fires its
    /// no-selection callback on `true`. The index and label persist.
    pub fn drag_end(&mut self) -> bool {
        let was_scrubbing = self.is_scrubbing;
        self.is_scrubbing = false;
        was_scrubbing
    }
}
