//! Playback progress tracking
//!
//! Mirrors what the progress slider shows: whole seconds elapsed out of the
//! current episode's duration.

use podcast_core::time::format_duration;

/// Elapsed/total tracker for the current episode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    position: u64,
    duration: u64,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over for a freshly loaded episode
    pub fn reset(&mut self, duration: u64) {
        self.position = 0;
        self.duration = duration;
    }

    /// Record a position report from the primitive
    ///
    /// Fractional seconds are floored; negative or non-finite reports count as 0.
    pub fn update(&mut self, seconds: f64) {
        self.position = if seconds.is_finite() && seconds > 0.0 {
            seconds.floor() as u64
        } else {
            0
        };
    }

    /// Record a position chosen by the user (slider drag)
    pub fn set_position(&mut self, seconds: u64) {
        self.position = seconds;
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Elapsed fraction in `0.0..=1.0` (0 for an unknown duration)
    pub fn fraction(&self) -> f32 {
        if self.duration == 0 {
            0.0
        } else {
            (self.position as f32 / self.duration as f32).clamp(0.0, 1.0)
        }
    }

    pub fn position_label(&self) -> String {
        format_duration(self.position)
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_floors_seconds() {
        let mut progress = Progress::new();
        progress.reset(120);

        progress.update(61.9);
        assert_eq!(progress.position(), 61);
        assert_eq!(progress.position_label(), "00:01:01");
        assert_eq!(progress.duration_label(), "00:02:00");
    }

    #[test]
    fn update_ignores_garbage() {
        let mut progress = Progress::new();
        progress.update(-3.0);
        assert_eq!(progress.position(), 0);
        progress.update(f64::NAN);
        assert_eq!(progress.position(), 0);
    }

    #[test]
    fn reset_starts_from_zero() {
        let mut progress = Progress::new();
        progress.reset(100);
        progress.update(50.0);

        progress.reset(30);

        assert_eq!(progress.position(), 0);
        assert_eq!(progress.duration(), 30);
    }

    #[test]
    fn fraction_is_clamped() {
        let mut progress = Progress::new();
        assert_eq!(progress.fraction(), 0.0);

        progress.reset(100);
        progress.update(25.0);
        assert_eq!(progress.fraction(), 0.25);

        progress.update(250.0);
        assert_eq!(progress.fraction(), 1.0);
    }
}
