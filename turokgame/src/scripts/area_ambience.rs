use std::fmt;
use std::sync::Arc;

use engine::audio::AudioHandle;
use engine::random::RandomSource;
use engine::script_log;
use shipyard::{EntityId, World};

use crate::content::AmbienceContent;

use super::{Effect, Script};

/// Ticks between chances to play a sound.
pub const AMBIENCE_TICK_INTERVAL: u64 = 60;

const PERCENT: u32 = 100;

/// Plays a random sound from its content every [`AMBIENCE_TICK_INTERVAL`]
/// ticks, with a `rand_factor` percent chance.
pub struct AreaAmbience {
    content: Arc<AmbienceContent>,
    counter: u64,
    random: Box<dyn RandomSource>,
}

impl AreaAmbience {
    pub fn new(content: Arc<AmbienceContent>, random: Box<dyn RandomSource>) -> AreaAmbience {
        AreaAmbience {
            content,
            counter: 0,
            random,
        }
    }

    pub fn name(&self) -> &str {
        &self.content.name
    }

    pub fn rand_factor(&self) -> i32 {
        self.content.rand_factor
    }

    pub fn sounds(&self) -> Option<&[String]> {
        self.content.sounds.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.content.active
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Advance one tick, returning the sound to play if the roll succeeds.
    pub fn on_local_tick(&mut self) -> Option<&str> {
        let sounds = match self.content.sounds.as_deref() {
            Some(sounds) if !sounds.is_empty() => sounds,
            _ => return None,
        };

        self.counter = self.counter.wrapping_add(1);
        if self.counter % AMBIENCE_TICK_INTERVAL != 0 {
            return None;
        }

        let roll = self.random.next(PERCENT);
        if i64::from(roll) >= i64::from(self.content.rand_factor) {
            return None;
        }

        // sounds.len() is non-zero here, and content lists are far below u32::MAX
        let index = self.random.next(sounds.len() as u32) as usize;
        sounds.get(index).map(String::as_str)
    }
}

impl fmt::Debug for AreaAmbience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AreaAmbience")
            .field("name", &self.content.name)
            .field("rand_factor", &self.content.rand_factor)
            .field("sounds", &self.content.sound_count())
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl Script for AreaAmbience {
    fn initialize(&mut self, entity_id: EntityId, _world: &World) -> Effect {
        match self.sounds() {
            Some(sounds) if !sounds.is_empty() => {
                script_log!(
                    DEBUG,
                    "Ambience {} on {:?}: {} sounds, randFactor {}",
                    self.name(),
                    entity_id,
                    sounds.len(),
                    self.rand_factor()
                );
            }
            _ => {
                script_log!(DEBUG, "Ambience {} on {:?} has no sounds", self.name(), entity_id);
            }
        }
        Effect::NoEffect
    }

    fn update(&mut self, entity_id: EntityId, _world: &World) -> Effect {
        match self.on_local_tick() {
            Some(name) => {
                script_log!(TRACE, "Ambience on {:?} playing {}", entity_id, name);
                Effect::PlaySound {
                    handle: AudioHandle::new(),
                    name: name.to_owned(),
                }
            }
            None => Effect::NoEffect,
        }
    }
}

#[cfg(test)]
mod tests {
    use engine::random::{SeededRandom, SequenceRandom};

    use super::*;

    fn ambience(rand_factor: i32, sounds: &[&str], random: Vec<u32>) -> AreaAmbience {
        let content = AmbienceContent::new(
            "Test",
            rand_factor,
            sounds.iter().map(|s| (*s).to_owned()).collect(),
        );
        AreaAmbience::new(Arc::new(content), Box::new(SequenceRandom::new(random)))
    }

    fn run(ambience: &mut AreaAmbience, ticks: u64) -> Vec<(u64, String)> {
        let mut played = Vec::new();
        for tick in 1..=ticks {
            if let Some(name) = ambience.on_local_tick() {
                played.push((tick, name.to_owned()));
            }
        }
        played
    }

    #[test]
    fn test_only_plays_on_interval() {
        let mut ambience = ambience(100, &["a", "b"], vec![0]);
        for tick in 1..=600u64 {
            let played = ambience.on_local_tick().is_some();
            assert_eq!(played, tick % AMBIENCE_TICK_INTERVAL == 0, "tick {}", tick);
        }
        assert_eq!(ambience.counter(), 600);
    }

    #[test]
    fn test_full_factor_plays_twice_in_120_ticks() {
        let mut ambience = ambience(100, &["a", "b"], vec![99, 1, 50, 0]);
        let played = run(&mut ambience, 120);
        assert_eq!(
            played,
            vec![(60, "b".to_owned()), (120, "a".to_owned())]
        );
    }

    #[test]
    fn test_zero_factor_never_plays() {
        let mut ambience = ambience(0, &["a", "b", "c"], vec![0]);
        assert!(run(&mut ambience, 1000).is_empty());
    }

    #[test]
    fn test_negative_and_oversized_factors() {
        let mut ambience_low = ambience(-5, &["a"], vec![0]);
        assert!(run(&mut ambience_low, 600).is_empty());

        let mut ambience_high = ambience(250, &["a"], vec![99]);
        assert_eq!(run(&mut ambience_high, 600).len(), 10);
    }

    #[test]
    fn test_empty_sounds_never_play_or_count() {
        let mut ambience = ambience(100, &[], vec![0]);
        assert!(run(&mut ambience, 1000).is_empty());
        assert_eq!(ambience.counter(), 0);
    }

    #[test]
    fn test_unset_sounds_never_play() {
        let content = AmbienceContent {
            rand_factor: 100,
            ..AmbienceContent::default()
        };
        let random = SequenceRandom::new(vec![0]);
        let mut ambience = AreaAmbience::new(Arc::new(content), Box::new(random));
        assert!(run(&mut ambience, 1000).is_empty());
        assert_eq!(ambience.counter(), 0);
    }

    #[test]
    fn test_roll_boundary() {
        // roll 21 < 22 plays, roll 22 does not
        let mut ambience = ambience(22, &["a", "b"], vec![21, 1, 22]);
        let played = run(&mut ambience, 120);
        assert_eq!(played, vec![(60, "b".to_owned())]);
    }

    #[test]
    fn test_trigger_rate_converges() {
        let content = AmbienceContent::jungle();
        let mut ambience = AreaAmbience::new(content.clone(), Box::new(SeededRandom::new(7)));
        let eligible_ticks = 20_000u64;

        let played = run(&mut ambience, eligible_ticks * AMBIENCE_TICK_INTERVAL);
        let rate = played.len() as f64 / eligible_ticks as f64;
        assert!((0.20..0.24).contains(&rate), "rate {}", rate);

        let sounds = content.sounds.as_ref().unwrap();
        assert!(played.iter().all(|(_, name)| sounds.contains(name)));
    }

    #[test]
    fn test_debug_output() {
        let mut ambience = ambience(22, &["a", "b"], vec![0]);
        run(&mut ambience, 5);
        let text = format!("{:?}", ambience);
        assert!(text.starts_with("AreaAmbience {"));
        assert!(text.contains(r#"name: "Test""#));
        assert!(text.contains("rand_factor: 22"));
        assert!(text.contains("sounds: 2"));
        assert!(text.contains("counter: 5"));
    }

    #[test]
    fn test_active_flag_does_not_gate() {
        let content = AmbienceContent {
            active: false,
            ..AmbienceContent::new("Inactive", 100, vec!["a".to_owned()])
        };
        let mut ambience =
            AreaAmbience::new(Arc::new(content), Box::new(SequenceRandom::new(vec![0])));
        assert!(!ambience.is_active());
        assert_eq!(run(&mut ambience, 60).len(), 1);
    }
}
