use std::fmt;

use cgmath::prelude::*;
use cgmath::{Matrix3, Quaternion};
use float_ord::FloatOrd;
use serde::{Deserialize, Serialize};

use crate::face::{cross, dot};
use crate::{Axis, Face, InvariantError, Sign};

/// Minimum `|q1 · q2|` for a rotation to be snapped to a cube rotation.
const SNAP_ALIGNMENT: f32 = 0.99;

/// One of the 24 rotations of a cube, stored as the world faces that the
/// cubie's local +X, +Y, and +Z faces point toward.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Orientation([Face; 3]);
impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "{x}{y}{z}")
    }
}
impl Orientation {
    /// Identity rotation.
    pub const IDENTITY: Self = Self([Face::R, Face::U, Face::F]);
    /// Number of rotations of a cube.
    pub const COUNT: usize = 24;

    /// Returns the rotation with the given canonical index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 24`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "orientation index {index} out of range");
        let x = Face::ALL[index / 4];
        let y = Face::ALL
            .into_iter()
            .filter(|f| f.axis() != x.axis())
            .nth(index % 4)
            .unwrap_or(Face::U);
        Self([x, y, third_face(x, y)])
    }
    /// Returns the canonical index of the rotation, in the range `0..24`.
    pub fn index(self) -> usize {
        let [x, y, _] = self.0;
        let rank = if y.axis() > x.axis() {
            y.index() - 2
        } else {
            y.index()
        };
        x.index() * 4 + rank
    }
    /// Iterates over all 24 rotations, in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }

    /// Returns the world faces that local +X, +Y, and +Z point toward.
    pub fn images(self) -> [Face; 3] {
        self.0
    }

    /// Returns the world face that the local face `local` points toward.
    pub fn facing(self, local: Face) -> Face {
        let image = self.0[local.axis() as usize];
        match local.sign() {
            Sign::Pos => image,
            Sign::Neg => image.opposite(),
        }
    }
    /// Returns the local face most aligned with the world face `world`.
    pub fn local_face_toward(self, world: Face) -> Face {
        let alignment = |local: Face| dot(self.facing(local).vector(), world.vector());
        Face::ALL.into_iter().fold(Face::R, |best, local| {
            if alignment(local) > alignment(best) {
                local
            } else {
                best
            }
        })
    }

    /// Returns the orientation after a rotation of `quarter_turns` times 90
    /// degrees about `axis`, by the right-hand rule.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: i32) -> Self {
        Self(self.0.map(|f| rotate_face(f, axis, quarter_turns)))
    }

    /// Returns the rotation matrix, whose columns are the images of the local
    /// axes.
    pub fn to_matrix(self) -> Matrix3<f32> {
        let [x, y, z] = self.0.map(Face::unit_vector);
        Matrix3::from_cols(x, y, z)
    }
    /// Returns the rotation as a unit quaternion.
    pub fn to_quaternion(self) -> Quaternion<f32> {
        Quaternion::from(self.to_matrix()).normalize()
    }

    /// Returns the cube rotation nearest to `q`, measured by the absolute value
    /// of the quaternion dot product.
    pub fn snap(q: Quaternion<f32>) -> Result<Self, InvariantError> {
        let q = q.normalize();
        let (alignment, nearest) = Self::all()
            .map(|o| (FloatOrd(o.to_quaternion().dot(q).abs()), o))
            .max_by_key(|(alignment, _)| *alignment)
            .ok_or(InvariantError::BadRotation(0.0))?;
        if alignment.0 < SNAP_ALIGNMENT || !alignment.0.is_finite() {
            return Err(InvariantError::BadRotation(alignment.0));
        }
        Ok(nearest)
    }
}

/// Returns the face that completes the right-handed frame `(x, y, ?)`.
fn third_face(x: Face, y: Face) -> Face {
    let v = cross(x.vector(), y.vector());
    Face::ALL
        .into_iter()
        .find(|f| f.vector() == v)
        .unwrap_or(Face::F)
}

/// Rotates a face direction by `quarter_turns` times 90 degrees about `axis`.
pub(crate) fn rotate_face(face: Face, axis: Axis, quarter_turns: i32) -> Face {
    let mut v = face.vector();
    for _ in 0..quarter_turns.rem_euclid(4) {
        let [x, y, z] = v;
        v = match axis {
            Axis::X => [x, -z, y],
            Axis::Y => [z, y, -x],
            Axis::Z => [-y, x, z],
        };
    }
    Face::from_vector(v).unwrap_or(face)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cgmath::{Deg, Vector3};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_orientation_indices() {
        let all: Vec<Orientation> = Orientation::all().collect();
        assert_eq!(all.len(), 24);
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), 24);
        for (i, o) in all.iter().enumerate() {
            assert_eq!(o.index(), i);
            assert!((o.to_matrix().determinant() - 1.0).abs() < 1e-6);
        }
        assert_eq!(Orientation::IDENTITY.index(), 0);
        assert_eq!(Orientation::from_index(0), Orientation::IDENTITY);
    }

    #[test]
    fn test_rotate_face_right_hand_rule() {
        assert_eq!(rotate_face(Face::U, Axis::X, 1), Face::F);
        assert_eq!(rotate_face(Face::F, Axis::Y, 1), Face::R);
        assert_eq!(rotate_face(Face::R, Axis::Z, 1), Face::U);
        assert_eq!(rotate_face(Face::R, Axis::Z, -1), Face::D);
        assert_eq!(rotate_face(Face::R, Axis::Z, 2), Face::L);
        assert_eq!(rotate_face(Face::R, Axis::X, 3), Face::R);
    }

    #[test]
    fn test_quaternion_matches_discrete_rotation() {
        for o in Orientation::all() {
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                let q = Quaternion::from_axis_angle(axis.unit_vector(), Deg(90.0));
                let snapped = Orientation::snap(q * o.to_quaternion()).unwrap();
                assert_eq!(snapped, o.rotated(axis, 1));
            }
        }
    }

    #[test]
    fn test_snap_rejects_diagonal_rotation() {
        let axis = Vector3::new(1.0, 1.0, 0.0).normalize();
        let q = Quaternion::from_axis_angle(axis, Deg(30.0));
        assert!(Orientation::snap(q).is_err());

        let q = Quaternion::from_axis_angle(Vector3::unit_y(), Deg(1.5));
        assert_eq!(Orientation::snap(q), Ok(Orientation::IDENTITY));
    }

    #[test]
    fn test_local_face_toward() {
        let o = Orientation::IDENTITY.rotated(Axis::Y, 1);
        for world in Face::ALL {
            assert_eq!(o.facing(o.local_face_toward(world)), world);
        }
        assert_eq!(o.local_face_toward(Face::R), Face::F);
    }
}
