/// Convert a playback position into a fraction of the whole.
///
/// Returns `None` while the duration is unknown (`NaN` before metadata loads,
/// `Infinity` for live streams, or zero).
#[must_use]
pub fn progress_fraction(position: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 || !position.is_finite() {
        return None;
    }
    Some((position / duration).clamp(0.0, 1.0))
}

/// Per-mount playback state.
///
/// `completed` only ever goes from false to true. An end reached by seeking
/// to the end does not flip it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    progress: f64,
    completed: bool,
    at_end_by_seek: bool,
}

impl PlaybackState {
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Record a position report, returning the new fraction if it is known.
    pub fn record_position(&mut self, position: f64, duration: f64) -> Option<f64> {
        let fraction = progress_fraction(position, duration)?;
        self.progress = fraction;
        if fraction < 1.0 {
            self.at_end_by_seek = false;
        }
        Some(fraction)
    }

    /// Record a seek. Landing on the end marks the next end signal as not genuine.
    pub fn record_seek(&mut self, position: f64, duration: f64) -> Option<f64> {
        let fraction = self.record_position(position, duration)?;
        self.at_end_by_seek = fraction >= 1.0;
        Some(fraction)
    }

    /// Record an end-of-media signal.
    ///
    /// Returns `true` only for the signal that flips the latch.
    pub fn record_end(&mut self) -> bool {
        self.progress = 1.0;
        if self.completed || std::mem::take(&mut self.at_end_by_seek) {
            return false;
        }
        self.completed = true;
        true
    }
}
