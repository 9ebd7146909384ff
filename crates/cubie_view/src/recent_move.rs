use cubie_core::{Direction, Face};
use web_time::{Duration, Instant};

/// Face key press that a following `2` or `'` key can modify.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RecentMove {
    /// Face that was twisted.
    pub face: Face,
    /// Direction it was twisted.
    pub direction: Direction,
    /// Time of the key press.
    pub time: Instant,
}
impl RecentMove {
    /// Returns whether a modifier pressed at `now` still applies.
    pub fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.time) < window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let t = Instant::now();
        let recent = RecentMove {
            face: Face::U,
            direction: Direction::Forward,
            time: t,
        };
        let window = Duration::from_millis(400);
        assert!(recent.is_fresh(t, window));
        assert!(recent.is_fresh(t + Duration::from_millis(399), window));
        assert!(!recent.is_fresh(t + Duration::from_millis(400), window));
    }
}
