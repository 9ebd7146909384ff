//! Animated move sequencing and solve session state for a 3x3x3 twisty
//! puzzle, to ensure consistent feel across frontends.
//!
//! Frontends forward key presses to a [`CubeSimulation`], call
//! [`CubeSimulation::step()`] once per frame, and draw the result of
//! [`CubeSimulation::render_data()`].

#[cfg(test)]
use pretty_assertions as _;
#[cfg(test)]
use proptest as _;

mod animations;
mod recent_move;
mod sequencer;
mod simulation;
mod timer;

pub use animations::TwistAnimation;
pub use recent_move::RecentMove;
pub use sequencer::{CompletedMove, CubieRenderData, Gate, MoveSequencer, SequencerEvent};
pub use simulation::{CubeSimulation, KeyInput, Status};
pub use timer::SolveTimer;
