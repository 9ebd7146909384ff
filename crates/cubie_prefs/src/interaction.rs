use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Seconds after a face key during which `2` or `'` modifies that twist.
    pub modifier_window: f32,
    /// Whether holding Shift while pressing a face key reverses the twist.
    pub shift_reverses: bool,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// Number of twists in a scramble.
    pub length: u32,
}
