use web_time::{Duration, Instant};

/// Stopwatch for a solve.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SolveTimer {
    /// Not started since the last reset.
    #[default]
    Idle,
    /// Started at the given time.
    Running(Instant),
    /// Stopped after the given duration.
    Stopped(Duration),
}
impl SolveTimer {
    /// Starts the timer from zero, unless it is already running.
    pub fn start(&mut self, now: Instant) {
        if !self.is_running() {
            *self = Self::Running(now);
        }
    }
    /// Stops the timer, if it is running.
    pub fn stop(&mut self, now: Instant) {
        if let Self::Running(start) = *self {
            *self = Self::Stopped(now.saturating_duration_since(start));
        }
    }
    /// Stops the timer and sets it to zero.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Returns whether the timer is running.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
    /// Returns the time shown on the timer at `now`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match *self {
            Self::Idle => Duration::ZERO,
            Self::Running(start) => now.saturating_duration_since(start),
            Self::Stopped(d) => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_lifecycle() {
        let t0 = Instant::now();
        let s = Duration::from_secs(1);
        let mut timer = SolveTimer::default();
        assert_eq!(timer.elapsed(t0 + s), Duration::ZERO);

        timer.start(t0);
        timer.start(t0 + s); // already running
        assert_eq!(timer.elapsed(t0 + 2 * s), 2 * s);

        timer.stop(t0 + 3 * s);
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(t0 + 10 * s), 3 * s);

        // Restarting after a stop starts over.
        timer.start(t0 + 10 * s);
        assert_eq!(timer.elapsed(t0 + 11 * s), s);

        timer.reset();
        assert_eq!(timer, SolveTimer::Idle);
    }
}
