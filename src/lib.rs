//! Whack-a-Zombie - a 2D reflex arcade game in Bevy.
//!
//! Zombies pop out of holes on a tiled lawn; click them with the hammer
//! before they sink back to score. Every miss and every zombie that gets
//! away is counted against you.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, config, global events, frame ordering
//! - **Assets**: Image and font resolution with placeholders
//! - **Board**: Hole layout and tiled background
//! - **Zombies**: Target lifecycle, spawning, hit testing
//! - **Round**: Scoreboard, countdown, restarts
//! - **UI**: Main menu, HUD, replay panel, hammer cursor
//! - **Audio**: Sound effects and music

pub mod animation;
pub mod assets;
pub mod audio;
pub mod board;
pub mod core;
pub mod round;
pub mod ui;
pub mod zombies;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct WhackPlugin;

impl Plugin for WhackPlugin {
    fn build(&self, app: &mut App) {
        configure_headless(app);

        app
            // Images and fonts
            .add_plugins(assets::GameAssetsPlugin)

            // Audio
            .add_plugins(audio::SoundPlugin);
    }
}

/// Install the gameplay plugins that need neither an asset server nor an
/// audio device. `GameAssets` must be provided separately.
pub fn configure_headless(app: &mut App) {
    app
        // Core systems (must be first)
        .add_plugins(core::CorePlugin)

        // Board and targets
        .add_plugins(board::BoardPlugin)
        .add_plugins(zombies::ZombiePlugin)

        // Scoring and round flow
        .add_plugins(round::RoundPlugin)

        // UI systems
        .add_plugins(ui::UiPlugin);
}
