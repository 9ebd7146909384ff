use std::fmt;
use std::str::FromStr;

use cgmath::{Deg, Quaternion, Rotation3};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Face, Layer, NotationError};

/// Direction of a face twist.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Unprimed twist, written `R`.
    #[default]
    Forward,
    /// Primed twist, written `R'`.
    Reverse,
}
impl Direction {
    /// Returns `1` for [`Direction::Forward`] and `-1` for
    /// [`Direction::Reverse`].
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Twist of one outer face, by a quarter turn or a double turn.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Face to turn.
    pub face: Face,
    /// Direction to turn it.
    pub direction: Direction,
    /// Whether the twist is a double (180 degree) turn.
    pub double: bool,
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.double {
            write!(f, "2")
        } else if self.direction == Direction::Reverse {
            write!(f, "'")
        } else {
            Ok(())
        }
    }
}
impl FromStr for Twist {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let face_char = chars.next().ok_or(NotationError::Empty)?;
        let face = Face::from_symbol(face_char)
            .ok_or_else(|| NotationError::UnknownFace(face_char.to_string()))?;
        let suffix = chars.as_str();
        let (direction, double) = match suffix {
            "" => (Direction::Forward, false),
            "'" | "\u{2019}" => (Direction::Reverse, false),
            "2" => (Direction::Forward, true),
            "2'" | "'2" | "2\u{2019}" | "\u{2019}2" => (Direction::Reverse, true),
            _ => {
                return Err(NotationError::BadSuffix {
                    twist: s.to_owned(),
                    suffix: suffix.to_owned(),
                });
            }
        };
        Ok(Self {
            face,
            direction,
            double,
        })
    }
}
impl Twist {
    /// Constructs a twist.
    pub const fn new(face: Face, direction: Direction, double: bool) -> Self {
        Self {
            face,
            direction,
            double,
        }
    }
    /// Constructs a quarter-turn twist.
    pub const fn quarter(face: Face, direction: Direction) -> Self {
        Self::new(face, direction, false)
    }
    /// Constructs a double-turn twist.
    pub const fn double(face: Face, direction: Direction) -> Self {
        Self::new(face, direction, true)
    }

    /// Returns the number of quarter turns: 1 or 2.
    pub fn turn_count(self) -> u8 {
        if self.double { 2 } else { 1 }
    }
    /// Returns the layer turned by the twist.
    pub fn layer(self) -> Layer {
        self.face.layer()
    }
    /// Returns the sign of each quarter turn about the positive axis.
    pub fn quarter_sign(self) -> i8 {
        self.face.sign().int() * self.direction.sign()
    }
    /// Returns the total rotation, in signed quarter turns about the positive
    /// axis.
    pub fn signed_quarter_turns(self) -> i32 {
        i32::from(self.quarter_sign()) * i32::from(self.turn_count())
    }
    /// Returns the rotation of a single quarter turn of the twist.
    pub fn quarter_rotation(self) -> Quaternion<f32> {
        let angle = Deg(90.0 * f32::from(self.quarter_sign()));
        Quaternion::from_axis_angle(self.face.axis().unit_vector(), angle)
    }

    /// Returns the inverse twist.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            direction: self.direction.rev(),
            ..self
        }
    }
}

/// Formats a sequence of twists as space-separated notation.
pub fn format_twists(twists: &[Twist]) -> String {
    twists.iter().join(" ")
}

/// Parses space-separated twist notation.
pub fn parse_twists(s: &str) -> Result<Vec<Twist>, NotationError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Returns the sequence of twists that undoes `twists`.
pub fn invert_twists(twists: &[Twist]) -> Vec<Twist> {
    twists.iter().rev().map(|t| t.rev()).collect()
}
