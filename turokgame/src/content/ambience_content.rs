use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

use super::jungle::{JUNGLE_NAME, JUNGLE_RAND_FACTOR, JUNGLE_SOUNDS};

pub const GENERIC_AMBIENCE_NAME: &str = "ComponentAreaAmbience";

static JUNGLE: Lazy<Arc<AmbienceContent>> = Lazy::new(|| {
    Arc::new(AmbienceContent {
        name: JUNGLE_NAME.to_owned(),
        rand_factor: JUNGLE_RAND_FACTOR,
        sounds: Some(JUNGLE_SOUNDS.iter().map(|s| (*s).to_owned()).collect()),
        ..AmbienceContent::default()
    })
});

/// Configuration bound to an area ambience component when it is spawned.
///
/// Fields a variant leaves out take the generic component's values:
/// no sounds, a `randFactor` of 0, and `active` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbienceContent {
    pub name: String,

    /// Percent chance to play a sound on each eligible tick.
    #[serde(default)]
    pub rand_factor: i32,

    #[serde(default)]
    pub sounds: Option<Vec<String>>,

    /// Carried for compatibility with existing content; the tick logic ignores it.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for AmbienceContent {
    fn default() -> Self {
        AmbienceContent {
            name: GENERIC_AMBIENCE_NAME.to_owned(),
            rand_factor: 0,
            sounds: None,
            active: default_active(),
        }
    }
}

impl AmbienceContent {
    pub fn new(name: &str, rand_factor: i32, sounds: Vec<String>) -> AmbienceContent {
        AmbienceContent {
            name: name.to_owned(),
            rand_factor,
            sounds: Some(sounds),
            ..AmbienceContent::default()
        }
    }

    /// Built-in jungle ambience: birds and monkeys, 22% per eligible tick.
    pub fn jungle() -> Arc<AmbienceContent> {
        JUNGLE.clone()
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.as_ref().map_or(0, Vec::len)
    }

    /// Loaded content must carry a percentage.
    pub fn validate(&self) -> ContentResult<()> {
        if !(0..=100).contains(&self.rand_factor) {
            return Err(ContentError::InvalidRandFactor {
                name: self.name.clone(),
                rand_factor: self.rand_factor,
            });
        }
        Ok(())
    }
}
