//! Zombie plugin - registers target spawning, aging and drawing.

use bevy::prelude::*;

use super::manager::ZombieManager;
use super::render::{despawn_zombie_sprites, sync_zombie_sprites};
use super::spawning::SpawnScheduler;
use crate::assets::GameAssets;
use crate::board::HoleLayout;
use crate::core::{FrameSet, GameConfig, GameState, ZombieExpired};

/// Zombie plugin - owns the target manager and its scheduler.
pub struct ZombiePlugin;

impl Plugin for ZombiePlugin {
    fn build(&self, app: &mut App) {
        app
            // A fresh manager per board, built from the resolved frames
            .add_systems(OnExit(GameState::MainMenu), init_zombies)
            .add_systems(OnEnter(GameState::MainMenu), despawn_zombie_sprites)
            // New targets only while the clock runs
            .add_systems(
                Update,
                schedule_spawns
                    .in_set(FrameSet::Spawn)
                    .run_if(in_state(GameState::Playing))
                    .run_if(resource_exists::<ZombieManager>)
                    .run_if(resource_exists::<HoleLayout>),
            )
            // Targets left on the board finish their animations after the round ends
            .add_systems(
                Update,
                advance_zombies
                    .in_set(FrameSet::Advance)
                    .run_if(round_on_board)
                    .run_if(resource_exists::<ZombieManager>),
            )
            .add_systems(
                Update,
                sync_zombie_sprites
                    .in_set(FrameSet::Present)
                    .run_if(round_on_board)
                    .run_if(resource_exists::<ZombieManager>),
            );
    }
}

/// Targets exist while playing and while the replay panel is up.
fn round_on_board(state: Res<State<GameState>>) -> bool {
    matches!(state.get(), GameState::Playing | GameState::GameOver)
}

/// Build the manager and scheduler for the round about to start.
pub fn init_zombies(
    mut commands: Commands,
    config: Res<GameConfig>,
    assets: Res<GameAssets>,
    mut exit: EventWriter<AppExit>,
) {
    match ZombieManager::from_config(&assets.zombie_frames, &config) {
        Ok(manager) => {
            commands.insert_resource(manager);
            commands.insert_resource(SpawnScheduler::new(&config.spawn, config.zombie.size));
        }
        Err(e) => {
            error!("Cannot build zombie animations: {}", e);
            exit.send(AppExit::error());
        }
    }
}

fn schedule_spawns(
    time: Res<Time>,
    mut scheduler: ResMut<SpawnScheduler>,
    mut manager: ResMut<ZombieManager>,
    layout: Res<HoleLayout>,
) {
    scheduler.tick(time.delta_secs(), &mut manager, &layout);
}

fn advance_zombies(
    time: Res<Time>,
    mut manager: ResMut<ZombieManager>,
    mut expired_events: EventWriter<ZombieExpired>,
) {
    let report = manager.update(time.delta_secs());
    for position in report.expired {
        expired_events.send(ZombieExpired { position });
    }
}
