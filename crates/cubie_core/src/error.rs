use thiserror::Error;

/// Error produced when parsing move notation or a face name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum NotationError {
    #[error("empty move")]
    Empty,
    #[error("unknown face {0:?}")]
    UnknownFace(String),
    #[error("bad move suffix {suffix:?} in {twist:?}")]
    BadSuffix { twist: String, suffix: String },
}

/// Broken internal invariant of the cube state. These are bugs, not user
/// errors, and the engine panics when it encounters one.
#[derive(Error, Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum InvariantError {
    #[error("position {0:?} is not within tolerance of the grid")]
    OffGrid([f32; 3]),
    #[error("position {0:?} is outside the cube")]
    OutOfRange([f32; 3]),
    #[error("rotation is not near any cube rotation (best alignment {0})")]
    BadRotation(f32),
    #[error("slot {0:?} is occupied by {1} cubies")]
    SlotCount([i8; 3], usize),
}
