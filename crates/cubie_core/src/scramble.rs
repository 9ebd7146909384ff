use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{Direction, Face, Timestamp, Twist};

/// Probability that each scramble twist is a double turn.
///
/// **Changing this will break scramble compatibility.**
pub const DOUBLE_TURN_PROBABILITY: f64 = 0.33;

/// Default number of twists in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 25;

/// Checkerboard pattern: a double turn of every face.
pub const CHECKERBOARD: [Twist; 6] = [
    Twist::double(Face::U, Direction::Forward),
    Twist::double(Face::D, Direction::Forward),
    Twist::double(Face::R, Direction::Forward),
    Twist::double(Face::L, Direction::Forward),
    Twist::double(Face::F, Direction::Forward),
    Twist::double(Face::B, Direction::Forward),
];

/// Generates `n` random twists.
///
/// Each twist turns a face chosen uniformly among those different from the
/// face of the previous twist, in a uniformly random direction, and is a
/// double turn with probability [`DOUBLE_TURN_PROBABILITY`]. Opposite faces may
/// follow each other.
pub fn generate_scramble(n: u32, rng: &mut impl Rng) -> Vec<Twist> {
    let mut last_face = None;
    (0..n)
        .map(|_| {
            let face = loop {
                let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
                if last_face != Some(face) {
                    break face;
                }
            };
            last_face = Some(face);
            let direction = if rng.random_bool(0.5) {
                Direction::Forward
            } else {
                Direction::Reverse
            };
            let double = rng.random_bool(DOUBLE_TURN_PROBABILITY);
            Twist::new(face, direction, double)
        })
        .collect()
}

/// Parameters to deterministically generate a scramble.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Number of twists.
    pub length: u32,
    /// Timestamp when the scramble was requested, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Timestamp>,
    /// Random seed.
    pub seed: String,
}
impl ScrambleParams {
    /// Generates new scramble parameters based on the current time and a
    /// random number.
    pub fn new(length: u32) -> Self {
        let time = Timestamp::now();
        let random_u64: u64 = rand::rng().random();
        Self {
            length,
            time: Some(time),
            seed: format!("{time}_{random_u64}"),
        }
    }
    /// Returns scramble parameters for a user-provided seed.
    pub fn from_seed(length: u32, seed: impl Into<String>) -> Self {
        Self {
            length,
            time: None,
            seed: seed.into(),
        }
    }

    /// Returns the random number generator determined by the parameters.
    pub fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let time_string = self.time.map(|t| t.to_string()).unwrap_or_default();

        let mut sha256 = sha2::Sha256::new();
        sha256.update(time_string.as_bytes());
        sha256.update((self.seed.len() as u64).to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest = sha256.finalize();

        let mut seed = [0; 32];
        seed.copy_from_slice(&digest[..32]);
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }

    /// Generates the scramble.
    pub fn generate(&self) -> Vec<Twist> {
        generate_scramble(self.length, &mut self.rng())
    }
}
