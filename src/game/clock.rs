/// Timing information for one rendered frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct FrameTime {
    /// Seconds since the previous frame
    pub(crate) delta: f32,

    /// Seconds since the program started
    pub(crate) now: f64,
}

/// Gates the snake's logical steps: a step is due once more than the step
/// interval has passed since the last one.  The reference point is reset to
/// the current time rather than advanced by the interval, so at most one
/// step is taken per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct StepClock {
    last_step: f64,
}

impl StepClock {
    /// Return whether a step with an interval of `interval_ms` milliseconds
    /// is due at time `now`, and if so, record `now` as the time of the
    /// latest step.
    pub(crate) fn due(&mut self, now: f64, interval_ms: u32) -> bool {
        if now - self.last_step > f64::from(interval_ms) / 1000.0 {
            self.last_step = now;
            true
        } else {
            false
        }
    }
}
