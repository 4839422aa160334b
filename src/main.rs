//! Whack-a-Zombie - Entry Point
//!
//! Controls:
//! - Left click: Swing the hammer
//! - R: Restart the round (or replay after it ends)
//! - M: Back to the menu from the replay panel
//! - Left/Right, Enter: Pick a difficulty and start from the menu

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;

use whack_a_zombie::core::GameConfig;

fn main() -> AppExit {
    // The window is sized from the config, so it is read before the app exists
    let (config, source) = match GameConfig::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Invalid game config: {e}");
            return AppExit::error();
        }
    };

    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Whack-a-Zombie".to_string(),
                resolution: (config.screen_width, config.screen_height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))

        // Audio backend
        .add_plugins(AudioPlugin)

        // Our game plugin
        .insert_resource(config)
        .insert_resource(source)
        .add_plugins(whack_a_zombie::WhackPlugin)

        .run()
}
