use std::fmt;
use std::str::FromStr;

use cgmath::Vector3;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::{Layer, NotationError};

/// 3-dimensional axis.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}
impl Axis {
    /// Returns the unit vector along this axis.
    pub fn unit_vector(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Positive or negative.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    /// Positive.
    Pos,
    /// Negative.
    Neg,
}
impl Sign {
    /// Returns `1` or `-1`.
    pub fn int(self) -> i8 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }
    /// Returns `1.0` or `-1.0`.
    pub fn float(self) -> f32 {
        self.int() as f32
    }
    /// Returns the opposite sign.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

/// Face of the cube, named by the world direction it points in.
///
/// Faces double as sticker colors: a sticker's color is the face it pointed
/// toward when the puzzle was created.
#[derive(
    Serialize,
    Deserialize,
    EnumIter,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[repr(u8)]
pub enum Face {
    /// Right (+X).
    #[default]
    R = 0,
    /// Left (-X).
    L = 1,
    /// Up (+Y).
    U = 2,
    /// Down (-Y).
    D = 3,
    /// Front (+Z).
    F = 4,
    /// Back (-Z).
    B = 5,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl FromStr for Face {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_symbol(c).ok_or_else(|| NotationError::UnknownFace(s.to_owned()))
            }
            (None, _) => Err(NotationError::Empty),
            _ => Err(NotationError::UnknownFace(s.to_owned())),
        }
    }
}
impl Face {
    /// All six faces, in the order `R L U D F B`.
    pub const ALL: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

    /// Returns the face on `axis` with `sign`.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Face::R,
            (Axis::X, Sign::Neg) => Face::L,
            (Axis::Y, Sign::Pos) => Face::U,
            (Axis::Y, Sign::Neg) => Face::D,
            (Axis::Z, Sign::Pos) => Face::F,
            (Axis::Z, Sign::Neg) => Face::B,
        }
    }

    /// Returns the index of the face in [`Face::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }
    /// Returns which end of the axis the face is on.
    pub fn sign(self) -> Sign {
        match self {
            Face::R | Face::U | Face::F => Sign::Pos,
            Face::L | Face::D | Face::B => Sign::Neg,
        }
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        Face::new(self.axis(), self.sign().rev())
    }

    /// Returns the outer layer turned by this face's twist.
    pub fn layer(self) -> Layer {
        Layer::new(self.axis(), self.sign().int())
    }

    /// Returns the integer unit vector pointing out of the face.
    pub fn vector(self) -> [i8; 3] {
        let mut ret = [0; 3];
        ret[self.axis() as usize] = self.sign().int();
        ret
    }
    /// Returns the face whose outward vector is `v`, or `None` if `v` is not
    /// a signed unit vector along one axis.
    pub fn from_vector(v: [i8; 3]) -> Option<Self> {
        match v {
            [1, 0, 0] => Some(Face::R),
            [-1, 0, 0] => Some(Face::L),
            [0, 1, 0] => Some(Face::U),
            [0, -1, 0] => Some(Face::D),
            [0, 0, 1] => Some(Face::F),
            [0, 0, -1] => Some(Face::B),
            _ => None,
        }
    }
    /// Returns the floating-point unit vector pointing out of the face.
    pub fn unit_vector(self) -> Vector3<f32> {
        self.axis().unit_vector() * self.sign().float()
    }

    /// Returns the uppercase notation symbol for the face.
    pub fn symbol(self) -> char {
        match self {
            Face::R => 'R',
            Face::L => 'L',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
        }
    }
    /// Returns the face with the given uppercase notation symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.symbol() == c)
    }
    /// Returns the face bound to a keyboard key, ignoring case.
    pub fn from_key(c: char) -> Option<Self> {
        Self::from_symbol(c.to_ascii_uppercase())
    }

    /// Returns a human-friendly name for the face.
    pub fn name(self) -> &'static str {
        match self {
            Face::R => "Right",
            Face::L => "Left",
            Face::U => "Up",
            Face::D => "Down",
            Face::F => "Front",
            Face::B => "Back",
        }
    }
}

/// Returns the dot product of two integer vectors.
pub(crate) fn dot(a: [i8; 3], b: [i8; 3]) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Returns the cross product of two integer vectors.
pub(crate) fn cross(a: [i8; 3], b: [i8; 3]) -> [i8; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_face_axis_sign_roundtrip() {
        for face in Face::iter() {
            assert_eq!(face, Face::new(face.axis(), face.sign()));
            assert_eq!(Some(face), Face::from_vector(face.vector()));
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
        }
    }

    #[test]
    fn test_face_symbols() {
        assert_eq!("R".parse(), Ok(Face::R));
        assert_eq!(Face::from_key('b'), Some(Face::B));
        assert_eq!(Face::from_symbol('b'), None);
        assert_eq!("".parse::<Face>(), Err(NotationError::Empty));
        assert!("X".parse::<Face>().is_err());
        assert!("RU".parse::<Face>().is_err());
    }

    #[test]
    fn test_right_handed_cross() {
        assert_eq!(cross(Face::R.vector(), Face::U.vector()), Face::F.vector());
        assert_eq!(cross(Face::U.vector(), Face::F.vector()), Face::R.vector());
        assert_eq!(cross(Face::F.vector(), Face::R.vector()), Face::U.vector());
        assert_eq!(dot(Face::R.vector(), Face::L.vector()), -1);
    }
}
