//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::config::{ConfigSource, Difficulty, GameConfig};
use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, MainMenu, Playing, GameOver)
/// - The Input → Resolve → Spawn → Advance → Present frame ordering
/// - Global events (PointerDown, WhackOutcome, ZombieExpired)
/// - The 2D camera and pointer input collection
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // main() normally inserts a validated config before adding plugins
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::default());
        }

        app
            // Initialize game states
            .init_state::<GameState>()
            .init_resource::<Difficulty>()

            // Register global events
            .add_event::<PointerDown>()
            .add_event::<WhackOutcome>()
            .add_event::<ZombieExpired>()

            // Input is applied before simulation, simulation before drawing
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Resolve,
                    FrameSet::Spawn,
                    FrameSet::Advance,
                    FrameSet::Present,
                )
                    .chain(),
            )

            .add_systems(Startup, (spawn_camera, log_config))

            // Nothing is loaded asynchronously yet, so leave Loading at once
            .add_systems(OnEnter(GameState::Loading), transition_to_main_menu)

            .add_systems(Update, collect_pointer_input.in_set(FrameSet::Input));
    }
}

/// Convert a screen position (top-left origin, y down) to 2D world space
/// for a camera centered on the screen.
pub fn world_position(screen: Vec2, screen_size: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        screen.x - screen_size.x / 2.0,
        screen_size.y / 2.0 - screen.y,
        z,
    )
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn log_config(config: Res<GameConfig>, source: Option<Res<ConfigSource>>) {
    match source.as_deref() {
        Some(ConfigSource::File(path)) => info!("Loaded game config from {}", path.display()),
        Some(ConfigSource::Defaults(path)) => {
            warn!("Could not find {}. Using defaults.", path.display())
        }
        None => {}
    }
    info!(
        "Round length {}s, {} targets max, holes per difficulty {:?}",
        config.round_seconds, config.spawn.max_concurrent, config.difficulty_holes
    );
}

fn transition_to_main_menu(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

/// Turn left-button presses into `PointerDown` events, in arrival order.
///
/// Runs in every state so presses on menu buttons are consumed there and
/// never reach a round.
fn collect_pointer_input(
    mut button_events: EventReader<MouseButtonInput>,
    state: Res<State<GameState>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut pointer_events: EventWriter<PointerDown>,
) {
    let Ok(window) = window_query.get_single() else {
        button_events.clear();
        return;
    };
    if *state.get() != GameState::Playing {
        button_events.clear();
        return;
    }

    for event in button_events.read() {
        if event.button != MouseButton::Left || event.state != ButtonState::Pressed {
            continue;
        }

        if let Some(position) = window.cursor_position() {
            pointer_events.send(PointerDown { position });
        }
    }
}
