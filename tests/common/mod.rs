//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `StatesPlugin` and `InputPlugin` back the state machine and key/mouse resources.
//! - every frame advances a fixed 100 ms so timings are deterministic.
//! - `GameAssets::placeholder()` stands in for the asset server.

#![allow(dead_code)]

use std::time::Duration;

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::mouse::MouseButtonInput;
use bevy::input::{ButtonState, InputPlugin};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::PrimaryWindow;

use whack_a_zombie::assets::GameAssets;
use whack_a_zombie::core::{GameConfig, GameState, PointerDown};

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless(config: GameConfig) -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(config)
        .insert_resource(GameAssets::placeholder());

    whack_a_zombie::configure_headless(&mut app);
    app
}

/// Config with a fixed spawn seed.
pub fn seeded_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.spawn.seed = Some(42);
    config
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn advance(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Step until `done` holds, giving up after `max_frames`.
pub fn advance_until(app: &mut App, max_frames: usize, mut done: impl FnMut(&mut App) -> bool) -> bool {
    for _ in 0..max_frames {
        if done(app) {
            return true;
        }
        app.update();
    }
    done(app)
}

pub fn go_to(app: &mut App, next: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(next);
    app.update();
}

/// Run until the loading screen hands over to the menu.
pub fn boot(app: &mut App) {
    assert!(advance_until(app, 5, |app| state(app) == GameState::MainMenu));
}

/// Boot to the menu, then start a round.
pub fn start_round(app: &mut App) {
    boot(app);
    go_to(app, GameState::Playing);
    assert_eq!(state(app), GameState::Playing);
}

pub fn click(app: &mut App, position: Vec2) {
    app.world_mut().send_event(PointerDown { position });
    app.update();
}

pub fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<C>>()
        .iter(app.world())
        .count()
}

/// Give the app a primary window with the pointer resting at `cursor`.
pub fn spawn_window(app: &mut App, cursor: Vec2) -> Entity {
    let mut window = Window::default();
    window.set_cursor_position(Some(cursor));
    app.world_mut().spawn((window, PrimaryWindow)).id()
}

pub fn move_cursor(app: &mut App, window: Entity, cursor: Vec2) {
    if let Some(mut window) = app.world_mut().get_mut::<Window>(window) {
        window.set_cursor_position(Some(cursor));
    }
}

/// Feed a raw mouse button event through the input pipeline and step.
pub fn mouse(app: &mut App, window: Entity, button: MouseButton, state: ButtonState) {
    app.world_mut().send_event(MouseButtonInput {
        button,
        state,
        window,
    });
    app.update();
}

/// Feed a raw key press through the input pipeline and step.
pub fn press_key(app: &mut App, key_code: KeyCode, character: &str) {
    app.world_mut().send_event(KeyboardInput {
        key_code,
        logical_key: Key::Character(character.into()),
        state: ButtonState::Pressed,
        repeat: false,
        window: Entity::PLACEHOLDER,
    });
    app.update();
}
