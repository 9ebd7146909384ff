use std::collections::VecDeque;
use std::fmt;

use cubie_core::{CHECKERBOARD, CubeState, Direction, Face, ScrambleParams, Twist};
use cubie_prefs::Preferences;
use serde::Serialize;
use web_time::{Duration, Instant};

use crate::{CompletedMove, CubieRenderData, MoveSequencer, RecentMove, SequencerEvent, SolveTimer};

const ASSUMED_FPS: f32 = 120.0;

/// Keyboard input to the simulation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyInput {
    /// Face key, possibly with Shift held.
    Face {
        /// Face bound to the key.
        face: Face,
        /// Whether Shift is held.
        shift: bool,
    },
    /// `2` key, which doubles the face twist that was just made.
    Double,
    /// `'` key, which twists the face that was just twisted the other way.
    Prime,
}
impl KeyInput {
    /// Returns the input for a typed character, if it is bound to anything.
    /// Uppercase face letters count as holding Shift.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Double),
            '\'' | '\u{2019}' => Some(Self::Prime),
            _ => Face::from_key(c).map(|face| Self::Face {
                face,
                shift: c.is_ascii_uppercase(),
            }),
        }
    }
}

/// Status message describing the session.
#[derive(Serialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Fresh or reset cube.
    #[default]
    Ready,
    /// Scramble twists are being applied.
    Scrambling,
    /// The scramble finished.
    Scrambled,
    /// The user has made a twist.
    InProgress,
    /// The user solved the cube.
    Solved,
    /// Pattern twists are being applied.
    ApplyingPattern,
    /// The pattern finished.
    PatternApplied,
}
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ready => "Ready",
            Status::Scrambling => "Scrambling\u{2026}",
            Status::Scrambled => "Scrambled. Start solving!",
            Status::InProgress => "In progress\u{2026}",
            Status::Solved => "Solved!",
            Status::ApplyingPattern => "Checkerboarding\u{2026}",
            Status::PatternApplied => "Checkerboard pattern applied!",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ScriptKind {
    Scramble,
    Pattern,
}

/// Interactive solve session: the animated cube plus move history, solve
/// timer, and status.
#[derive(Debug, Default)]
pub struct CubeSimulation {
    sequencer: MoveSequencer,

    /// Notation of each recorded twist since the last scramble, reset, or
    /// pattern.
    history: Vec<String>,
    status: Status,
    timer: SolveTimer,
    /// Last face key press, for the `2` and `'` modifiers.
    recent_move: Option<RecentMove>,
    /// Scramble applied to the cube, if any.
    scramble: Option<ScrambleParams>,
    /// Kind of script running.
    running_script: Option<ScriptKind>,

    /// Whether the cube was solved by the most recent recorded twist.
    solved: bool,
    /// Whether the solved state has been handled by the UI.
    solved_state_handled: bool,
    /// Completed twists not yet taken by the UI.
    completed_moves: VecDeque<CompletedMove>,

    /// Time of last frame, or `None` if we are not in the middle of an
    /// animation.
    last_frame_time: Option<Instant>,
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube.
    pub fn new() -> Self {
        Self {
            solved_state_handled: true,
            ..Default::default()
        }
    }

    /// Returns the latest cube state, after the twist in progress completes.
    pub fn cube(&self) -> &CubeState {
        self.sequencer.cube()
    }
    /// Returns the notation of each recorded twist.
    pub fn history(&self) -> &[String] {
        &self.history
    }
    /// Returns the status.
    pub fn status(&self) -> Status {
        self.status
    }
    /// Returns the solve timer.
    pub fn timer(&self) -> SolveTimer {
        self.timer
    }
    /// Returns the scramble applied to the cube, if any.
    pub fn scramble_params(&self) -> Option<&ScrambleParams> {
        self.scramble.as_ref()
    }
    /// Returns whether a twist is being animated.
    pub fn is_rotating(&self) -> bool {
        self.sequencer.is_rotating()
    }
    /// Returns the visual state of every cubie.
    pub fn render_data(&self, prefs: &Preferences) -> Vec<CubieRenderData> {
        self.sequencer.render_data(&prefs.animation)
    }

    /// Handles a key press at the current time.
    pub fn handle_key(&mut self, input: KeyInput, prefs: &Preferences) -> bool {
        self.handle_key_at(input, Instant::now(), prefs)
    }
    /// Handles a key press at `now`. Returns whether a twist was started.
    ///
    /// All keys are ignored while a twist is in progress.
    pub fn handle_key_at(&mut self, input: KeyInput, now: Instant, prefs: &Preferences) -> bool {
        if self.is_rotating() {
            log::debug!("ignoring {input:?} during twist");
            return false;
        }

        let window = Duration::try_from_secs_f32(prefs.interaction.modifier_window)
            .unwrap_or(Duration::ZERO);
        match input {
            KeyInput::Face { face, shift } => {
                let direction = match shift && prefs.interaction.shift_reverses {
                    true => Direction::Reverse,
                    false => Direction::Forward,
                };
                let started = self.do_manual_twist(Twist::quarter(face, direction), now);
                if started {
                    self.recent_move = Some(RecentMove {
                        face,
                        direction,
                        time: now,
                    });
                }
                started
            }
            KeyInput::Double | KeyInput::Prime => {
                let Some(recent) = self.recent_move.filter(|r| r.is_fresh(now, window)) else {
                    return false;
                };
                self.recent_move = None;
                let twist = match input {
                    KeyInput::Double => Twist::double(recent.face, recent.direction),
                    _ => Twist::quarter(recent.face, recent.direction.rev()),
                };
                self.do_manual_twist(twist, now)
            }
        }
    }

    /// Starts a recorded twist at the current time. Returns whether the twist
    /// was started.
    pub fn twist(&mut self, twist: Twist) -> bool {
        self.do_manual_twist(twist, Instant::now())
    }
    fn do_manual_twist(&mut self, twist: Twist, now: Instant) -> bool {
        let started = self.sequencer.request_move(twist, true);
        if started {
            self.timer.start(now);
        }
        started
    }

    /// Clears the history and timer, then scrambles the cube from its
    /// current state. Returns the scramble twists, or `None` if a twist is in
    /// progress.
    pub fn scramble(&mut self, params: ScrambleParams) -> Option<Vec<Twist>> {
        let twists = params.generate();
        if !self.run_script(ScriptKind::Scramble, twists.clone()) {
            return None;
        }
        self.scramble = Some(params);
        Some(twists)
    }
    /// Clears the history and timer, then applies the checkerboard pattern
    /// from the current state. Returns whether the pattern was started.
    pub fn checkerboard(&mut self) -> bool {
        let started = self.run_script(ScriptKind::Pattern, CHECKERBOARD.to_vec());
        if started {
            self.scramble = None;
        }
        started
    }
    fn run_script(&mut self, kind: ScriptKind, twists: Vec<Twist>) -> bool {
        if self.is_rotating() {
            log::debug!("ignoring {kind:?} during twist");
            return false;
        }
        self.timer.reset();
        self.history.clear();
        self.recent_move = None;
        self.solved = false;
        self.status = match kind {
            ScriptKind::Scramble => Status::Scrambling,
            ScriptKind::Pattern => Status::ApplyingPattern,
        };
        self.running_script = Some(kind);
        self.sequencer.run_script(twists)
    }

    /// Discards any twist in progress and resets the cube, history, timer, and
    /// status.
    pub fn reset(&mut self) {
        self.sequencer.reset();
        *self = Self::new();
    }

    /// Advances the simulation to the next frame, using the time since the
    /// last frame. Returns whether the cube must be redrawn.
    pub fn step(&mut self, prefs: &Preferences) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };

        let needs_redraw = self.advance(delta, now, prefs);

        if needs_redraw {
            self.last_frame_time = Some(now);
        } else {
            self.last_frame_time = None;
        }

        needs_redraw
    }

    /// Advances the simulation by `delta`, with `now` as the current time.
    /// Returns whether the cube must be redrawn.
    pub fn advance(&mut self, delta: Duration, now: Instant, prefs: &Preferences) -> bool {
        let needs_redraw = self.sequencer.step(delta, &prefs.animation);

        while let Some(event) = self.sequencer.poll_event() {
            match event {
                SequencerEvent::MoveCompleted(completed) => {
                    self.history.push(completed.notation.clone());
                    self.status = Status::InProgress;
                    self.solved = completed.solved;
                    if completed.solved {
                        self.timer.stop(now);
                        self.status = Status::Solved;
                        self.solved_state_handled = false;
                    }
                    self.completed_moves.push_back(completed);
                }
                SequencerEvent::ScriptFinished => {
                    self.status = match self.running_script.take() {
                        Some(ScriptKind::Scramble) => Status::Scrambled,
                        Some(ScriptKind::Pattern) => Status::PatternApplied,
                        None => self.status,
                    };
                }
            }
        }

        needs_redraw
    }

    /// Returns the next recorded twist that finished, if any.
    pub fn poll_completed_move(&mut self) -> Option<CompletedMove> {
        self.completed_moves.pop_front()
    }

    /// Returns whether the cube is solved.
    pub fn is_solved(&self) -> bool {
        self.cube().is_solved()
    }
    /// Returns whether the cube was _just_ solved by a recorded twist.
    pub fn handle_newly_solved_state(&mut self) -> bool {
        self.solved && !std::mem::replace(&mut self.solved_state_handled, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_input_from_char() {
        assert_eq!(
            KeyInput::from_char('r'),
            Some(KeyInput::Face {
                face: Face::R,
                shift: false,
            }),
        );
        assert_eq!(
            KeyInput::from_char('F'),
            Some(KeyInput::Face {
                face: Face::F,
                shift: true,
            }),
        );
        assert_eq!(KeyInput::from_char('2'), Some(KeyInput::Double));
        assert_eq!(KeyInput::from_char('\u{2019}'), Some(KeyInput::Prime));
        assert_eq!(KeyInput::from_char('x'), None);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::default().to_string(), "Ready");
        assert_eq!(Status::Scrambled.to_string(), "Scrambled. Start solving!");
        assert_eq!(Status::InProgress.to_string(), "In progress\u{2026}");
    }
}
