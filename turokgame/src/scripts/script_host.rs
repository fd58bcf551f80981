use engine::audio::AudioPlayer;
use engine::random::RandomSource;
use engine::script_log;
use shipyard::{Component, EntityId, Get, View, World};

use crate::content::ContentRegistry;
use crate::error::ContentResult;

use super::{Effect, Script};

/// Name a script was spawned under, kept on the entity for lookups and logging.
#[derive(Debug, Component, Clone, PartialEq, Eq)]
pub struct PropScriptName(pub String);

/// Owns placed script instances and drives them one tick at a time.
///
/// Scripts update in spawn order. Sound effects are forwarded to the audio
/// player as soon as the script that produced them returns.
pub struct ScriptHost<A: AudioPlayer> {
    world: World,
    scripts: Vec<(EntityId, Box<dyn Script>)>,
    audio: A,
    tick: u64,
}

impl<A: AudioPlayer> ScriptHost<A> {
    pub fn new(audio: A) -> ScriptHost<A> {
        ScriptHost {
            world: World::new(),
            scripts: Vec::new(),
            audio,
            tick: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn entities(&self) -> Vec<EntityId> {
        self.scripts.iter().map(|(entity_id, _)| *entity_id).collect()
    }

    pub fn spawn(&mut self, name: &str, mut script: Box<dyn Script>) -> EntityId {
        let entity_id = self.world.add_entity((PropScriptName(name.to_owned()),));
        script_log!(DEBUG, "Spawned {} as {:?}", name, entity_id);

        let effect = script.initialize(entity_id, &self.world);
        apply_effect(&mut self.audio, effect);

        self.scripts.push((entity_id, script));
        entity_id
    }

    /// Spawn an area ambience bound to the named content variant.
    pub fn spawn_ambience(
        &mut self,
        registry: &ContentRegistry,
        variant: &str,
        random: Box<dyn RandomSource>,
    ) -> ContentResult<EntityId> {
        let ambience = registry.instantiate(variant, random)?;
        let name = ambience.name().to_owned();
        Ok(self.spawn(&name, Box::new(ambience)))
    }

    pub fn remove(&mut self, entity_id: EntityId) -> bool {
        let before = self.scripts.len();
        self.scripts.retain(|(id, _)| *id != entity_id);
        let removed = self.scripts.len() != before;

        if removed {
            self.world.delete_entity(entity_id);
            script_log!(DEBUG, "Removed {:?}", entity_id);
        }
        removed
    }

    pub fn script_name(&self, entity_id: EntityId) -> Option<String> {
        let names = self.world.borrow::<View<PropScriptName>>().ok()?;
        names.get(entity_id).ok().map(|name| name.0.clone())
    }

    pub fn tick(&mut self) {
        self.tick += 1;
        for (entity_id, script) in self.scripts.iter_mut() {
            let effect = script.update(*entity_id, &self.world);
            apply_effect(&mut self.audio, effect);
        }
    }

    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }
}

fn apply_effect<A: AudioPlayer>(audio: &mut A, effect: Effect) {
    match effect {
        Effect::NoEffect => (),
        Effect::PlaySound { handle, name } => audio.play(handle, &name),
        Effect::Multiple(effects) => {
            for effect in effects {
                apply_effect(audio, effect);
            }
        }
    }
}
