//! Time-driven tween for the one-shot line reveal.
//!
//! The tween never reads the clock itself; callers pass an explicit
//! [`Instant`] so frame building stays deterministic and testable.

use std::time::{Duration, Instant};

/// Easing applied to normalized tween time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    #[default]
    EaseOut,
    /// Slow start and end.
    EaseInOut,
}

impl Easing {
    /// Apply the easing to a normalized time value in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// A one-shot tween from 0 to 1 over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    duration: Duration,
    easing: Easing,
    started_at: Option<Instant>,
}

impl Tween {
    /// Create an unstarted tween.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            started_at: None,
        }
    }

    /// Create a tween that is already complete.
    pub fn finished() -> Self {
        let mut tween = Self::new(Duration::ZERO, Easing::Linear);
        tween.start(Instant::now());
        tween
    }

    /// Start the tween at the given instant.
    ///
    /// Starting an already running tween restarts it.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Whether the tween has been started.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Eased progress in [0, 1] at the given instant.
    ///
    /// An unstarted tween reports 0.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
        self.easing.apply(elapsed / self.duration.as_secs_f32())
    }

    /// Whether the tween has run its full duration.
    pub fn is_complete(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| now.saturating_duration_since(started_at) >= self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstarted_tween_reports_zero() {
        let tween = Tween::new(Duration::from_secs(2), Easing::EaseOut);
        assert_eq!(tween.progress(Instant::now()), 0.0);
        assert!(!tween.is_complete(Instant::now()));
    }

    #[test]
    fn progress_runs_zero_to_one() {
        let mut tween = Tween::new(Duration::from_secs(2), Easing::EaseOut);
        let start = Instant::now();
        tween.start(start);
        assert_eq!(tween.progress(start), 0.0);
        let end = start + Duration::from_secs(2);
        assert_eq!(tween.progress(end), 1.0);
        assert!(tween.is_complete(end));
        // Clamped past the end.
        assert_eq!(tween.progress(end + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn progress_is_monotone() {
        let mut tween = Tween::new(Duration::from_secs(1), Easing::EaseInOut);
        let start = Instant::now();
        tween.start(start);
        let mut last = 0.0;
        for ms in (0..=1000).step_by(50) {
            let progress = tween.progress(start + Duration::from_millis(ms));
            assert!(progress >= last);
            last = progress;
        }
    }

    #[test]
    fn ease_out_front_loads_motion() {
        assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
    }

    #[test]
    fn finished_tween_is_complete() {
        let tween = Tween::finished();
        assert_eq!(tween.progress(Instant::now()), 1.0);
        assert!(tween.is_complete(Instant::now()));
    }
}
