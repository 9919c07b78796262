use std::time::Duration;

use crate::animation::Easing;

/// Configuration for the GPUI chart view.
#[derive(Debug, Clone)]
pub struct ChartViewConfig {
    /// Duration of the mount-time line reveal.
    pub reveal_duration: Duration,
    /// Easing applied to the reveal.
    pub reveal_easing: Easing,
    /// Draw the line fully on the first frame instead of animating.
    pub skip_reveal: bool,
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self {
            reveal_duration: Duration::from_secs(2),
            reveal_easing: Easing::EaseOut,
            skip_reveal: false,
        }
    }
}
