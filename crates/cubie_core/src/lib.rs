//! Cubie state, face twists, solved detection, and scramble generation for a
//! 3x3x3 twisty puzzle.
//!
//! The puzzle is modeled as 27 cubies on an integer grid. Each cubie remembers
//! its position, one of the 24 rotations of the cube, and the fixed colors of
//! its stickers. A twist rotates one layer of cubies about an axis.

#[cfg(test)]
use pretty_assertions as _;
#[cfg(test)]
use proptest as _;

mod cubie;
mod error;
mod face;
mod layer;
mod orientation;
mod scramble;
mod state;
mod timestamp;
mod twist;

/// Re-export of `cgmath`.
pub use cgmath;

pub use cubie::{Cubie, CubieId, CubieTransform, Position, Positioned};
pub use error::{InvariantError, NotationError};
pub use face::{Axis, Face, Sign};
pub use layer::{Layer, select_layer};
pub use orientation::Orientation;
pub use scramble::{
    CHECKERBOARD, DEFAULT_SCRAMBLE_LENGTH, DOUBLE_TURN_PROBABILITY, ScrambleParams,
    generate_scramble,
};
pub use state::CubeState;
pub use timestamp::Timestamp;
pub use twist::{Direction, Twist, format_twists, invert_twists, parse_twists};

/// Number of cubies in the puzzle, including the hidden core.
pub const CUBIE_COUNT: usize = 27;

/// Tolerance used when deciding whether a continuous coordinate lies within a
/// layer.
pub const LAYER_EPSILON: f32 = 0.001;
