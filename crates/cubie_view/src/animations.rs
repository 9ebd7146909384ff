use cgmath::{Deg, Quaternion, Rotation3};
use cubie_core::{CubieId, Twist};
use cubie_prefs::AnimationPreferences;
use web_time::Duration;

/// If at least this much of a quarter turn is animated in one frame, just
/// skip the animation to reduce unnecessary flashing.
const MIN_TWIST_DELTA: f32 = 1.0 / 3.0;

/// Twist in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistAnimation {
    /// Twist being animated.
    pub twist: Twist,
    /// Cubies captured when the twist started.
    pub grip: Vec<CubieId>,
    /// Whether the twist reports a completed move when it finishes.
    pub recorded: bool,
    /// Number of quarter turns fully animated.
    quarters_done: u8,
    /// Progress of the current quarter turn, from 0.0 to 1.0.
    progress: f32,
}
impl TwistAnimation {
    /// Constructs an animation at its starting point.
    pub fn new(twist: Twist, grip: Vec<CubieId>, recorded: bool) -> Self {
        Self {
            twist,
            grip,
            recorded,
            quarters_done: 0,
            progress: 0.0,
        }
    }

    /// Steps the animation forward. Returns whether every quarter turn of the
    /// twist has finished.
    pub fn proceed(&mut self, delta: Duration, prefs: &AnimationPreferences) -> bool {
        // `twist_duration` is in seconds (per quarter turn); `twist_delta` is
        // fraction of a quarter turn per frame.
        let mut twist_delta = delta.as_secs_f32() / prefs.twist_duration;
        // Also handles division by zero and negative durations.
        if !(0.0..MIN_TWIST_DELTA).contains(&twist_delta) {
            twist_delta = 1.0; // Instantly complete the quarter turn.
        }

        self.progress += twist_delta;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.quarters_done += 1;
        }
        self.is_done()
    }

    /// Returns whether every quarter turn of the twist has finished.
    pub fn is_done(&self) -> bool {
        self.quarters_done >= self.twist.turn_count()
    }

    /// Returns the number of quarter turns animated so far, including the
    /// eased fraction of the current one.
    pub fn quarters_animated(&self, prefs: &AnimationPreferences) -> f32 {
        f32::from(self.quarters_done) + prefs.twist_interpolation.interpolate(self.progress)
    }

    /// Returns the current rotation of the gripped cubies.
    pub fn rotation(&self, prefs: &AnimationPreferences) -> Quaternion<f32> {
        let quarters = self.quarters_animated(prefs) * f32::from(self.twist.quarter_sign());
        Quaternion::from_axis_angle(self.twist.face.axis().unit_vector(), Deg(90.0 * quarters))
    }
}

#[cfg(test)]
mod tests {
    use cgmath::prelude::*;
    use cubie_core::{Direction, Face};
    use cubie_prefs::InterpolateFn;

    use super::*;

    fn prefs() -> AnimationPreferences {
        AnimationPreferences {
            twist_duration: 0.25,
            twist_interpolation: InterpolateFn::Lerp,
        }
    }

    #[test]
    fn test_double_takes_two_quarters() {
        let prefs = prefs();
        let frame = Duration::from_micros(62_500);
        let mut anim =
            TwistAnimation::new(Twist::double(Face::U, Direction::Forward), vec![], true);
        let mut frames = 0;
        while !anim.proceed(frame, &prefs) {
            frames += 1;
            assert!(frames < 100);
        }
        // 4 frames per quarter, and the last frame returns `true`.
        assert_eq!(frames + 1, 8);
    }

    #[test]
    fn test_long_frame_completes_quarter() {
        let prefs = prefs();
        let mut anim =
            TwistAnimation::new(Twist::quarter(Face::R, Direction::Forward), vec![], true);
        assert!(anim.proceed(Duration::from_millis(100), &prefs));

        let prefs = AnimationPreferences {
            twist_duration: 0.0,
            ..prefs
        };
        let mut anim =
            TwistAnimation::new(Twist::quarter(Face::R, Direction::Forward), vec![], true);
        assert!(anim.proceed(Duration::from_millis(1), &prefs));
    }

    #[test]
    fn test_rotation_is_halfway() {
        let prefs = prefs();
        let mut anim =
            TwistAnimation::new(Twist::quarter(Face::L, Direction::Forward), vec![], true);
        anim.proceed(Duration::from_micros(62_500), &prefs);
        anim.proceed(Duration::from_micros(62_500), &prefs);
        // L turns negatively about +X.
        let expected = Quaternion::from_axis_angle(cgmath::Vector3::unit_x(), Deg(-45.0));
        assert!(anim.rotation(&prefs).dot(expected).abs() > 0.9999);
    }
}
