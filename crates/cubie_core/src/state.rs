use std::collections::HashMap;

use cgmath::{Deg, Quaternion, Rotation3};

use crate::face::dot;
use crate::{
    Axis, CUBIE_COUNT, Cubie, CubieId, CubieTransform, Face, InvariantError, Layer, Position,
    Twist,
};

/// State of the whole puzzle: the 27 cubies and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    cubies: Vec<Cubie>,
}
impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}
impl CubeState {
    /// Constructs a solved puzzle.
    pub fn new() -> Self {
        Self {
            cubies: Cubie::create_all(),
        }
    }
    /// Discards all cubies and recreates them in the solved arrangement.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns all cubies, indexed by ID.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }
    /// Returns the cubie with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is not less than [`CUBIE_COUNT`].
    pub fn cubie(&self, id: CubieId) -> &Cubie {
        &self.cubies[id.index()]
    }
    /// Returns the cubie currently at `position`, if any.
    pub fn cubie_at(&self, position: Position) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.position() == position)
    }
    /// Returns the transform of every cubie, indexed by ID.
    pub fn transforms(&self) -> Vec<CubieTransform> {
        self.cubies.iter().map(|c| c.transform()).collect()
    }

    /// Returns the IDs of the cubies in a layer.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not `-1`, `0`, or `1`.
    pub fn select_layer(&self, axis: Axis, value: i8) -> Vec<CubieId> {
        crate::select_layer(&self.cubies, axis, value)
            .into_iter()
            .map(|i| self.cubies[i].id())
            .collect()
    }

    /// Applies a face twist.
    pub fn apply_twist(&mut self, twist: Twist) {
        log::trace!("applying {twist}");
        self.apply_turn(twist.layer(), twist.signed_quarter_turns());
    }
    /// Applies a sequence of face twists in order.
    pub fn apply_twists(&mut self, twists: &[Twist]) {
        for &twist in twists {
            self.apply_twist(twist);
        }
    }
    /// Rotates a layer by `signed_quarter_turns` times 90 degrees about the
    /// positive direction of its axis.
    pub fn apply_turn(&mut self, layer: Layer, signed_quarter_turns: i32) {
        // Equivalent turn in the range `-1..=2`.
        let quarter_turns = match signed_quarter_turns.rem_euclid(4) {
            3 => -1,
            n => n,
        };
        let ids = self.select_layer(layer.axis, layer.value);
        let sign = if quarter_turns < 0 { -1.0 } else { 1.0 };
        let quarter = Quaternion::from_axis_angle(layer.axis.unit_vector(), Deg(90.0 * sign));
        self.rotate_cubies(&ids, quarter, quarter_turns.unsigned_abs());
    }

    /// Rotates the cubies `ids` by `quarter` repeated `repeat` times, then
    /// snaps them to the grid.
    ///
    /// # Panics
    ///
    /// Panics if the result does not snap to a valid puzzle state. This can
    /// only happen if `quarter` is not a quarter turn about a coordinate axis.
    pub fn rotate_cubies(&mut self, ids: &[CubieId], quarter: Quaternion<f32>, repeat: u32) {
        for &id in ids {
            let cubie = &mut self.cubies[id.index()];
            let mut transform = cubie.transform();
            for _ in 0..repeat {
                transform = transform.rotated(quarter);
            }
            if let Err(e) = cubie.commit(transform) {
                log::error!("error snapping cubie {id}: {e}");
                panic!("error snapping cubie {id}: {e}");
            }
        }
        if let Err(e) = self.check_invariants() {
            log::error!("invalid cube state after twist: {e}");
            panic!("invalid cube state after twist: {e}");
        }
    }

    /// Checks that the cubies occupy every grid slot exactly once.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut counts: HashMap<Position, usize> = Position::all().map(|p| (p, 0)).collect();
        for cubie in &self.cubies {
            match counts.get_mut(&cubie.position()) {
                Some(n) => *n += 1,
                None => return Err(InvariantError::SlotCount(cubie.position().0, 1)),
            }
        }
        match counts.into_iter().find(|&(_, n)| n != 1) {
            Some((pos, n)) => Err(InvariantError::SlotCount(pos.0, n)),
            None if self.cubies.len() == CUBIE_COUNT => Ok(()),
            None => Err(InvariantError::SlotCount([0; 3], self.cubies.len())),
        }
    }

    /// Returns whether every visible sticker on each face matches the color
    /// of that face.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|world| {
            let layer = world.layer();
            self.cubies
                .iter()
                .filter(|c| layer.contains(c.position()))
                .all(|c| c.sticker_facing(world) == Some(world))
        })
    }

    /// Returns the 3x3 grid of sticker colors visible on a face, as seen
    /// looking at that face from outside the puzzle. Rows are listed from top
    /// to bottom and columns from left to right.
    pub fn face_grid(&self, face: Face) -> [[Option<Face>; 3]; 3] {
        let (up, right) = face_view(face);
        let mut grid = [[None; 3]; 3];
        let layer = face.layer();
        for cubie in &self.cubies {
            let pos = cubie.position();
            if !layer.contains(pos) {
                continue;
            }
            let row = (1 - dot(pos.0, up.vector())) as usize;
            let col = (1 + dot(pos.0, right.vector())) as usize;
            grid[row][col] = cubie.sticker_facing(face);
        }
        grid
    }
}

/// Returns the world faces that appear up and to the right when looking at
/// `face` from outside the puzzle.
fn face_view(face: Face) -> (Face, Face) {
    match face {
        Face::F => (Face::U, Face::R),
        Face::B => (Face::U, Face::L),
        Face::R => (Face::U, Face::B),
        Face::L => (Face::U, Face::F),
        Face::U => (Face::B, Face::R),
        Face::D => (Face::F, Face::R),
    }
}
