use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Axis, LAYER_EPSILON, Position, Positioned};

/// Slice of the puzzle perpendicular to an axis.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layer {
    /// Axis perpendicular to the layer.
    pub axis: Axis,
    /// Coordinate of the layer along `axis`: `-1`, `0`, or `1`.
    pub value: i8,
}
impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.axis, self.value)
    }
}
impl Layer {
    /// Constructs a layer.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not `-1`, `0`, or `1`.
    pub fn new(axis: Axis, value: i8) -> Self {
        assert!(
            (-1..=1).contains(&value),
            "layer value {value} is outside the puzzle",
        );
        Self { axis, value }
    }

    /// Returns whether a grid position lies in the layer.
    pub fn contains(self, position: Position) -> bool {
        position[self.axis] == self.value
    }
    /// Returns whether a continuous point lies in the layer. Points that have
    /// drifted slightly from the grid give the same answer as after snapping.
    pub fn contains_point(self, point: &impl Positioned) -> bool {
        let p = point.position_vector()[self.axis as usize];
        (p - f32::from(self.value)).abs() < 1.0 - LAYER_EPSILON
    }
}

/// Returns the indices of all items in the layer `value` along `axis`.
///
/// # Panics
///
/// Panics if `value` is not `-1`, `0`, or `1`.
pub fn select_layer<'a, T: 'a + Positioned>(
    items: impl IntoIterator<Item = &'a T>,
    axis: Axis,
    value: i8,
) -> Vec<usize> {
    let layer = Layer::new(axis, value);
    items
        .into_iter()
        .enumerate()
        .filter(|(_, item)| layer.contains_point(*item))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use cgmath::prelude::*;
    use cgmath::{Deg, Quaternion, Vector3};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Cubie;

    #[test]
    fn test_layer_sizes() {
        let cubies = Cubie::create_all();
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for value in -1..=1 {
                assert_eq!(select_layer(&cubies, axis, value).len(), 9);
            }
        }
    }

    #[test]
    fn test_unsnapped_selection_matches_snapped() {
        let cubies = Cubie::create_all();
        let q = Quaternion::from_axis_angle(Vector3::unit_x(), Deg(89.97));
        let drifted: Vec<_> = cubies.iter().map(|c| c.transform().rotated(q)).collect();
        let snapped_q = Quaternion::from_axis_angle(Vector3::unit_x(), Deg(90.0));
        let snapped: Vec<_> = cubies
            .iter()
            .map(|c| c.transform().rotated(snapped_q))
            .collect();
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for value in -1..=1 {
                assert_eq!(
                    select_layer(&drifted, axis, value),
                    select_layer(&snapped, axis, value),
                );
            }
        }
    }

    #[test]
    fn test_middle_slice() {
        let layer = Layer::new(Axis::Y, 0);
        assert!(layer.contains(Position([1, 0, -1])));
        assert!(!layer.contains(Position([1, 1, -1])));
    }

    #[test]
    #[should_panic]
    fn test_bad_layer_value() {
        Layer::new(Axis::Z, 2);
    }
}
