use std::fmt;
use std::ops::Index;

use cgmath::prelude::*;
use cgmath::{Quaternion, Vector3};
use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::{Axis, CUBIE_COUNT, Face, InvariantError, Orientation};

/// Maximum distance from the grid for a position to be snapped.
const SNAP_DISTANCE: f32 = 0.1;

/// Identifier for a cubie, assigned in creation order.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubieId(pub u8);
impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
impl CubieId {
    /// Returns the ID as an index into the cubie list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Grid position of a cubie, with each coordinate in `{-1, 0, 1}`.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(pub [i8; 3]);
impl Index<Axis> for Position {
    type Output = i8;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis as usize]
    }
}
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}
impl Position {
    /// Iterates over all 27 grid positions in creation order: X outermost,
    /// then Y, then Z, each from -1 to 1.
    pub fn all() -> impl Iterator<Item = Self> {
        iproduct!(-1..=1, -1..=1, -1..=1).map(|(x, y, z)| Self([x, y, z]))
    }

    /// Returns the position as a floating-point vector.
    pub fn to_vector(self) -> Vector3<f32> {
        let [x, y, z] = self.0.map(f32::from);
        Vector3::new(x, y, z)
    }

    /// Rounds a continuous position to the grid.
    pub fn snap(v: Vector3<f32>) -> Result<Self, InvariantError> {
        let coords: [f32; 3] = v.into();
        let rounded = coords.map(f32::round);
        if std::iter::zip(coords, rounded).any(|(c, r)| c.is_nan() || (c - r).abs() > SNAP_DISTANCE)
        {
            return Err(InvariantError::OffGrid(coords));
        }
        if rounded.iter().any(|r| r.abs() > 1.0) {
            return Err(InvariantError::OutOfRange(coords));
        }
        Ok(Self(rounded.map(|r| r as i8)))
    }

    /// Returns the number of coordinates on the outside of the cube: 0 for the
    /// core, 1 for a center, 2 for an edge, and 3 for a corner.
    pub fn outer_count(self) -> usize {
        self.0.iter().filter(|&&c| c != 0).count()
    }
}

/// Anything with a location in space that a layer can be selected from.
pub trait Positioned {
    /// Returns the location as a continuous vector.
    fn position_vector(&self) -> Vector3<f32>;
}

/// Continuous rigid transform of a cubie, used during animation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubieTransform {
    /// Center of the cubie.
    pub position: Vector3<f32>,
    /// Rotation of the cubie from its solved orientation.
    pub rotation: Quaternion<f32>,
}
impl Positioned for CubieTransform {
    fn position_vector(&self) -> Vector3<f32> {
        self.position
    }
}
impl CubieTransform {
    /// Returns the transform after applying the rotation `q` about the
    /// center of the puzzle.
    #[must_use]
    pub fn rotated(self, q: Quaternion<f32>) -> Self {
        Self {
            position: q.rotate_vector(self.position),
            rotation: q * self.rotation,
        }
    }
}

/// One of the 27 pieces of the puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cubie {
    id: CubieId,
    position: Position,
    orientation: Orientation,
    /// Sticker color on each local face, indexed by [`Face::index()`].
    stickers: [Option<Face>; 6],
}
impl Positioned for Cubie {
    fn position_vector(&self) -> Vector3<f32> {
        self.position.to_vector()
    }
}
impl Cubie {
    /// Constructs a cubie at `position` with the identity orientation and a
    /// sticker on every local face that lies on the outside of the cube.
    pub fn new_solved(id: CubieId, position: Position) -> Self {
        let stickers = Face::ALL.map(|face| {
            (position[face.axis()] == face.sign().int()).then_some(face)
        });
        Self {
            id,
            position,
            orientation: Orientation::IDENTITY,
            stickers,
        }
    }
    /// Constructs all 27 cubies in their solved arrangement.
    pub fn create_all() -> Vec<Self> {
        let cubies: Vec<Self> = Position::all()
            .enumerate()
            .map(|(i, pos)| Self::new_solved(CubieId(i as u8), pos))
            .collect();
        debug_assert_eq!(cubies.len(), CUBIE_COUNT);
        cubies
    }

    /// Returns the cubie's ID.
    pub fn id(&self) -> CubieId {
        self.id
    }
    /// Returns the cubie's current grid position.
    pub fn position(&self) -> Position {
        self.position
    }
    /// Returns the cubie's current rotation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    /// Returns the sticker colors indexed by local face.
    pub fn stickers(&self) -> [Option<Face>; 6] {
        self.stickers
    }

    /// Returns the color of the sticker on the local face `local`, or `None` if
    /// that face is hidden inside the puzzle.
    pub fn sticker(&self, local: Face) -> Option<Face> {
        self.stickers[local.index()]
    }
    /// Returns the color of the sticker currently facing the world direction
    /// `world`.
    pub fn sticker_facing(&self, world: Face) -> Option<Face> {
        self.sticker(self.orientation.local_face_toward(world))
    }

    /// Returns the cubie's transform.
    pub fn transform(&self) -> CubieTransform {
        CubieTransform {
            position: self.position.to_vector(),
            rotation: self.orientation.to_quaternion(),
        }
    }
    /// Snaps a continuous transform to the grid and stores it.
    ///
    /// On error, the cubie is not modified.
    pub(crate) fn commit(&mut self, transform: CubieTransform) -> Result<(), InvariantError> {
        let position = Position::snap(transform.position)?;
        let orientation = Orientation::snap(transform.rotation)?;
        self.position = position;
        self.orientation = orientation;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_creation_order() {
        let cubies = Cubie::create_all();
        assert_eq!(cubies[0].position(), Position([-1, -1, -1]));
        assert_eq!(cubies[1].position(), Position([-1, -1, 0]));
        assert_eq!(cubies[3].position(), Position([-1, 0, -1]));
        assert_eq!(cubies[13].position(), Position([0, 0, 0]));
        assert_eq!(cubies[26].position(), Position([1, 1, 1]));
        for (i, cubie) in cubies.iter().enumerate() {
            assert_eq!(cubie.id().index(), i);
        }
    }

    #[test]
    fn test_sticker_counts() {
        for cubie in Cubie::create_all() {
            let count = cubie.stickers().iter().flatten().count();
            assert_eq!(count, cubie.position().outer_count());
        }
    }

    #[test]
    fn test_corner_stickers() {
        let corner = Cubie::new_solved(CubieId(26), Position([1, 1, 1]));
        assert_eq!(
            corner.stickers(),
            [Some(Face::R), None, Some(Face::U), None, Some(Face::F), None],
        );
        assert_eq!(corner.sticker_facing(Face::U), Some(Face::U));
        assert_eq!(corner.sticker_facing(Face::D), None);
    }

    #[test]
    fn test_position_snap() {
        let v = Vector3::new(0.999, -0.02, -1.04);
        assert_eq!(Position::snap(v), Ok(Position([1, 0, -1])));
        assert!(Position::snap(Vector3::new(0.5, 0.0, 0.0)).is_err());
        assert!(Position::snap(Vector3::new(2.0, 0.0, 0.0)).is_err());
        assert!(Position::snap(Vector3::new(f32::NAN, 0.0, 0.0)).is_err());
    }
}
