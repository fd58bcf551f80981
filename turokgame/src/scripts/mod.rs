mod area_ambience;
mod script_host;

pub use area_ambience::{AMBIENCE_TICK_INTERVAL, AreaAmbience};
pub use script_host::{PropScriptName, ScriptHost};

use engine::audio::AudioHandle;
use shipyard::{EntityId, World};

/// What a script asks the host to do after a hook runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    NoEffect,
    PlaySound { handle: AudioHandle, name: String },
    Multiple(Vec<Effect>),
}

/// Per-entity behavior driven by the host. Both hooks default to doing nothing.
pub trait Script {
    /// Called once when the entity is spawned.
    fn initialize(&mut self, _entity_id: EntityId, _world: &World) -> Effect {
        Effect::NoEffect
    }

    /// Called once per simulation tick.
    fn update(&mut self, _entity_id: EntityId, _world: &World) -> Effect {
        Effect::NoEffect
    }
}
