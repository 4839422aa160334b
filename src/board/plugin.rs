//! Board plugin - hole layout and background for the selected difficulty.

use bevy::prelude::*;

use super::background::{despawn_board, spawn_board};
use super::holes::HoleLayout;
use crate::core::{Difficulty, GameConfig, GameState};

/// Board plugin - builds the board when leaving the menu, removes it on return.
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnExit(GameState::MainMenu),
            (build_hole_layout, spawn_board.run_if(resource_exists::<HoleLayout>)).chain(),
        )
        .add_systems(OnEnter(GameState::MainMenu), despawn_board);
    }
}

/// Generate the hole grid for the chosen difficulty.
pub fn build_hole_layout(
    mut commands: Commands,
    config: Res<GameConfig>,
    difficulty: Res<Difficulty>,
    mut exit: EventWriter<AppExit>,
) {
    let holes = config.holes_for(*difficulty);
    match HoleLayout::generate(holes, &config) {
        Ok(layout) => {
            info!("{} difficulty: {} holes", difficulty.label(), layout.len());
            commands.insert_resource(layout);
        }
        Err(e) => {
            error!("Cannot lay out the board: {}", e);
            exit.send(AppExit::error());
        }
    }
}
