use std::collections::VecDeque;

use cgmath::{Quaternion, Vector3};
use cubie_core::{CubeState, CubieId, Face, Twist};
use cubie_prefs::AnimationPreferences;
use web_time::Duration;

use crate::animations::TwistAnimation;

/// Twist that finished animating and was reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedMove {
    /// Twist that was applied.
    pub twist: Twist,
    /// Notation for the twist, such as `R'` or `U2`.
    pub notation: String,
    /// Whether the cube was solved after the twist.
    pub solved: bool,
}

/// Event emitted by the [`MoveSequencer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerEvent {
    /// A recorded twist finished.
    MoveCompleted(CompletedMove),
    /// The last twist of a script finished.
    ScriptFinished,
}

/// Whether a twist is being animated.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Gate {
    /// No twist is in progress.
    #[default]
    Idle,
    /// A twist is in progress.
    Rotating(TwistAnimation),
}

/// Visual state of one cubie for a single frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubieRenderData {
    /// Cubie ID.
    pub id: CubieId,
    /// Center of the cubie, interpolated during a twist.
    pub position: Vector3<f32>,
    /// Rotation of the cubie, interpolated during a twist.
    pub rotation: Quaternion<f32>,
    /// Sticker color on each local face, indexed by [`Face::index()`]. Apply
    /// `rotation` to find the direction each one faces.
    pub stickers: [Option<Face>; 6],
}

/// Single owner of the cube state, which lets one twist animate at a time.
///
/// Requests made while a twist is animating are ignored. Scripts (such as
/// scrambles) run one twist after another without gaps, so no other request
/// can land in between.
#[derive(Debug, Default, Clone)]
pub struct MoveSequencer {
    cube: CubeState,
    gate: Gate,
    /// Remaining twists of the running script.
    script: VecDeque<Twist>,
    /// Whether a script is running.
    script_active: bool,
    events: VecDeque<SequencerEvent>,
}
impl MoveSequencer {
    /// Constructs a sequencer for a solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the latest cube state, not including the twist in progress.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }
    /// Returns the animation gate.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }
    /// Returns whether no twist is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.gate, Gate::Idle)
    }
    /// Returns whether a twist is in progress.
    pub fn is_rotating(&self) -> bool {
        !self.is_idle()
    }
    /// Returns whether a script is running.
    pub fn is_running_script(&self) -> bool {
        self.script_active
    }
    /// Returns the twist in progress, if any.
    pub fn current_twist(&self) -> Option<Twist> {
        match &self.gate {
            Gate::Idle => None,
            Gate::Rotating(anim) => Some(anim.twist),
        }
    }

    /// Starts a twist if no twist is in progress. Returns whether the twist
    /// was started.
    ///
    /// When a recorded twist finishes, [`SequencerEvent::MoveCompleted`] is
    /// emitted.
    pub fn request_move(&mut self, twist: Twist, recorded: bool) -> bool {
        if self.is_rotating() || self.script_active {
            log::debug!("ignoring {twist} because another twist is in progress");
            return false;
        }
        log::trace!("starting {twist} (recorded = {recorded})");
        self.start(twist, recorded);
        true
    }

    /// Starts running unrecorded twists one after another. Returns `false`
    /// (and does nothing) if a twist is in progress.
    ///
    /// When the last twist finishes, [`SequencerEvent::ScriptFinished`] is
    /// emitted.
    pub fn run_script(&mut self, twists: impl IntoIterator<Item = Twist>) -> bool {
        if self.is_rotating() || self.script_active {
            log::debug!("ignoring script because another twist is in progress");
            return false;
        }
        self.script = twists.into_iter().collect();
        log::debug!("running script of {} twists", self.script.len());
        match self.script.pop_front() {
            Some(first) => {
                self.script_active = true;
                self.start(first, false);
            }
            None => self.events.push_back(SequencerEvent::ScriptFinished),
        }
        true
    }

    fn start(&mut self, twist: Twist, recorded: bool) {
        let layer = twist.layer();
        let grip = self.cube.select_layer(layer.axis, layer.value);
        self.gate = Gate::Rotating(TwistAnimation::new(twist, grip, recorded));
    }

    /// Advances the twist in progress by `delta`. Returns whether the cube
    /// must be redrawn.
    pub fn step(&mut self, delta: Duration, prefs: &AnimationPreferences) -> bool {
        let Gate::Rotating(anim) = &mut self.gate else {
            return false;
        };
        if anim.proceed(delta, prefs)
            && let Gate::Rotating(anim) = std::mem::take(&mut self.gate)
        {
            self.commit(anim);
        }
        true
    }

    fn commit(&mut self, anim: TwistAnimation) {
        let TwistAnimation {
            twist,
            grip,
            recorded,
            ..
        } = anim;
        log::trace!("committing {twist}");
        self.cube
            .rotate_cubies(&grip, twist.quarter_rotation(), u32::from(twist.turn_count()));

        if recorded {
            self.events
                .push_back(SequencerEvent::MoveCompleted(CompletedMove {
                    twist,
                    notation: twist.to_string(),
                    solved: self.cube.is_solved(),
                }));
        }

        if self.script_active {
            match self.script.pop_front() {
                Some(next) => self.start(next, false),
                None => {
                    log::debug!("script finished");
                    self.script_active = false;
                    self.events.push_back(SequencerEvent::ScriptFinished);
                }
            }
        }
    }

    /// Returns the next event, if there is one.
    pub fn poll_event(&mut self) -> Option<SequencerEvent> {
        self.events.pop_front()
    }

    /// Discards the twist in progress, the rest of any script, and any pending
    /// events, then resets the cube to solved.
    pub fn reset(&mut self) {
        if let Some(twist) = self.current_twist() {
            log::debug!("discarding {twist} in progress");
        }
        *self = Self::new();
    }

    /// Returns the visual state of every cubie, including the partial rotation
    /// of the twist in progress.
    pub fn render_data(&self, prefs: &AnimationPreferences) -> Vec<CubieRenderData> {
        let mut transforms = self.cube.transforms();
        if let Gate::Rotating(anim) = &self.gate {
            let rotation = anim.rotation(prefs);
            for id in &anim.grip {
                let t = &mut transforms[id.index()];
                *t = t.rotated(rotation);
            }
        }
        std::iter::zip(self.cube.cubies(), transforms)
            .map(|(cubie, t)| CubieRenderData {
                id: cubie.id(),
                position: t.position,
                rotation: t.rotation,
                stickers: cubie.stickers(),
            })
            .collect()
    }
}
