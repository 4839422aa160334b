//! Sound effect and music handles.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_kira_audio::AudioSource as KiraSource;

use crate::assets::load_file;
use crate::core::{AudioConfig, WhackOutcome};

pub const MUSIC_PATH: &str = "sounds/music/background.wav";

/// Short one-shot sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Hit,
    Miss,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::Hit, SoundEffect::Miss];

    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Hit => "hit",
            SoundEffect::Miss => "miss",
        }
    }

    pub fn path(self) -> String {
        format!("sounds/sfx/{}.wav", self.name())
    }

    /// Mixer level for this effect.
    pub fn volume(self, config: &AudioConfig) -> f64 {
        match self {
            SoundEffect::Hit => config.hit_volume,
            SoundEffect::Miss => config.miss_volume,
        }
    }
}

impl From<&WhackOutcome> for SoundEffect {
    fn from(outcome: &WhackOutcome) -> Self {
        match outcome {
            WhackOutcome::Hit { .. } => SoundEffect::Hit,
            WhackOutcome::Miss { .. } => SoundEffect::Miss,
        }
    }
}

/// Handles for every sound that was found on disk.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    effects: HashMap<SoundEffect, Handle<KiraSource>>,
    music: Option<Handle<KiraSource>>,
}

impl SoundBank {
    pub fn effect(&self, effect: SoundEffect) -> Option<&Handle<KiraSource>> {
        self.effects.get(&effect)
    }

    pub fn music(&self) -> Option<&Handle<KiraSource>> {
        self.music.as_ref()
    }
}

/// Queue every sound that exists; report the ones that do not.
pub fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut bank = SoundBank::default();

    for effect in SoundEffect::ALL {
        match load_file::<KiraSource>(&asset_server, &effect.path()) {
            Ok(handle) => {
                bank.effects.insert(effect, handle);
            }
            Err(e) => warn!("{}. The {} sound stays silent.", e, effect.name()),
        }
    }

    match load_file::<KiraSource>(&asset_server, MUSIC_PATH) {
        Ok(handle) => bank.music = Some(handle),
        Err(e) => warn!("{}. Playing without music.", e),
    }

    info!("Loaded {} of {} sound effects", bank.effects.len(), SoundEffect::ALL.len());
    commands.insert_resource(bank);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_map_to_sfx_files() {
        assert_eq!(SoundEffect::Hit.path(), "sounds/sfx/hit.wav");
        assert_eq!(SoundEffect::Miss.path(), "sounds/sfx/miss.wav");
    }

    #[test]
    fn outcomes_pick_their_effect() {
        let hit = WhackOutcome::Hit { position: Vec2::ZERO };
        let miss = WhackOutcome::Miss { position: Vec2::ZERO };
        assert_eq!(SoundEffect::from(&hit), SoundEffect::Hit);
        assert_eq!(SoundEffect::from(&miss), SoundEffect::Miss);
    }

    #[test]
    fn volumes_come_from_config() {
        let config = AudioConfig {
            music_volume: 0.5,
            hit_volume: 0.2,
            miss_volume: 0.4,
        };
        assert_eq!(SoundEffect::Hit.volume(&config), 0.2);
        assert_eq!(SoundEffect::Miss.volume(&config), 0.4);
    }

    #[test]
    fn empty_bank_has_nothing_to_play() {
        let bank = SoundBank::default();
        assert!(bank.effect(SoundEffect::Hit).is_none());
        assert!(bank.music().is_none());
    }
}
