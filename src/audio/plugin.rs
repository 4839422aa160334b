//! Sound plugin - effects for whacks and looping background music.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioApp, AudioChannel, AudioControl};

use super::sounds::{load_sounds, SoundBank, SoundEffect};
use crate::core::{FrameSet, GameConfig, GameState, WhackOutcome};

/// Separate channel so stopping the music leaves effects alone.
#[derive(Resource)]
pub struct MusicChannel;

/// Sound plugin - needs `bevy_kira_audio::AudioPlugin` on the app.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_audio_channel::<MusicChannel>()
            .add_systems(Startup, load_sounds)
            .add_systems(OnExit(GameState::MainMenu), start_music)
            .add_systems(OnEnter(GameState::MainMenu), stop_music)
            .add_systems(Update, play_whack_sounds.in_set(FrameSet::Present));
    }
}

/// Play one effect. Returns false when the sound was not found on disk.
pub fn play_sound(audio: &Audio, bank: &SoundBank, config: &GameConfig, effect: SoundEffect) -> bool {
    let Some(handle) = bank.effect(effect) else {
        warn_once!("Sound '{}' not found", effect.name());
        return false;
    };
    audio
        .play(handle.clone())
        .with_volume(effect.volume(&config.audio));
    true
}

fn play_whack_sounds(
    mut outcomes: EventReader<WhackOutcome>,
    audio: Res<Audio>,
    bank: Res<SoundBank>,
    config: Res<GameConfig>,
) {
    for outcome in outcomes.read() {
        play_sound(&audio, &bank, &config, SoundEffect::from(outcome));
    }
}

fn start_music(music: Res<AudioChannel<MusicChannel>>, bank: Res<SoundBank>, config: Res<GameConfig>) {
    let Some(handle) = bank.music() else {
        return;
    };
    music.stop();
    music
        .play(handle.clone())
        .looped()
        .with_volume(config.audio.music_volume);
}

fn stop_music(music: Res<AudioChannel<MusicChannel>>) {
    music.stop();
}
