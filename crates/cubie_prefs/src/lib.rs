//! User preferences for the cubie simulator.
//!
//! Defaults are embedded from `default.yaml`. A user file, if any, is layered
//! on top of them.

#![allow(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate strum;

#[cfg(test)]
use pretty_assertions as _;
#[cfg(test)]
use tempfile as _;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animations;
mod interaction;

pub use animations::*;
pub use interaction::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
    pub scramble: ScramblePreferences,
}
impl Preferences {
    /// Loads the default preferences, overridden by the file at `user_file`
    /// if there is one. If loading fails, then the default preferences are
    /// returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_PREFS_STR,
            PREFS_FILE_FORMAT,
        ));

        match user_file {
            Some(path) if path.is_file() => {
                log::info!("Loading preferences from {}", path.display());
                config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
            }
            Some(path) => log::warn!("Preferences file {} does not exist", path.display()),
            None => (),
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                DEFAULT_PREFS.clone()
            })
    }

    /// Saves the preferences to `path` as YAML, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        Ok(())
    }
}
