//! Tiled background with scattered grass and the holes punched into it.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::holes::HoleLayout;
use crate::assets::{sprite_or_placeholder, GameAssets};
use crate::core::{world_position, GameConfig};

/// Draw depth of each background layer.
const TILE_Z: f32 = 0.0;
const GRASS_Z: f32 = 0.5;
const HOLE_Z: f32 = 1.0;

/// Marker for every entity that belongs to the board.
#[derive(Component)]
pub struct BoardPiece;

/// Tile numbers for the background, laid out like a numpad:
/// corners 1/3/7/9, edges 2/4/6/8 and 5 for the interior.
pub fn tile_map(rows: usize, cols: usize) -> Vec<Vec<u8>> {
    let mut map = vec![vec![5; cols]; rows];
    if rows == 0 || cols == 0 {
        return map;
    }

    for row in map.iter_mut() {
        row[0] = 4;
        row[cols - 1] = 6;
    }
    for c in 0..cols {
        map[0][c] = 2;
        map[rows - 1][c] = 8;
    }
    map[0][0] = 1;
    map[0][cols - 1] = 3;
    map[rows - 1][0] = 7;
    map[rows - 1][cols - 1] = 9;
    map
}

/// Grass decoration per cell: 0 none, 1 or 2 for the two grass images.
///
/// The first row and column are always bare.
pub fn grass_map(rows: usize, cols: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = vec![vec![0; cols]; rows];

    for row in map.iter_mut().skip(1) {
        for cell in row.iter_mut().skip(1) {
            let roll: u32 = rng.gen_range(1..=100);
            *cell = match roll {
                0..=85 => 0,
                86..=92 => 1,
                _ => 2,
            };
        }
    }
    map
}

/// Rows and columns of tiles needed to cover the screen.
pub fn grid_size(config: &GameConfig) -> (usize, usize) {
    let rows = (config.screen_height / config.tile_size).round() as usize;
    let cols = (config.screen_width / config.tile_size).round() as usize;
    (rows, cols)
}

fn tile_color(number: u8) -> Color {
    match number {
        5 => Color::srgb(0.33, 0.52, 0.25),
        _ => Color::srgb(0.27, 0.42, 0.2),
    }
}

/// Spawn the background, grass and holes for the current layout.
pub fn spawn_board(
    mut commands: Commands,
    config: Res<GameConfig>,
    assets: Res<GameAssets>,
    layout: Res<HoleLayout>,
) {
    let screen = config.screen_size();
    let tile = config.tile_size;
    let (rows, cols) = grid_size(&config);
    let tile_size = Vec2::splat(tile);

    for (r, row) in tile_map(rows, cols).iter().enumerate() {
        for (c, &number) in row.iter().enumerate() {
            let center = Vec2::new(c as f32 * tile, r as f32 * tile) + tile_size / 2.0;
            commands.spawn((
                sprite_or_placeholder(assets.tile(number), tile_size, tile_color(number)),
                Transform::from_translation(world_position(center, screen, TILE_Z)),
                BoardPiece,
            ));
        }
    }

    for (r, row) in grass_map(rows, cols, config.background_seed).iter().enumerate() {
        for (c, &kind) in row.iter().enumerate() {
            if kind == 0 {
                continue;
            }
            let center = Vec2::new(c as f32 * tile, r as f32 * tile) + tile_size / 2.0;
            let image = assets.grass[usize::from(kind - 1)].as_ref();
            commands.spawn((
                sprite_or_placeholder(image, tile_size * 0.5, Color::srgb(0.2, 0.6, 0.2)),
                Transform::from_translation(world_position(center, screen, GRASS_Z)),
                BoardPiece,
            ));
        }
    }

    let hole_size = Vec2::splat(layout.hole_size());
    for center in layout.centers() {
        commands.spawn((
            sprite_or_placeholder(assets.hole.as_ref(), hole_size, Color::srgb(0.12, 0.08, 0.05)),
            Transform::from_translation(world_position(center, screen, HOLE_Z)),
            BoardPiece,
        ));
    }

    info!("Board built: {}x{} tiles, {} holes", cols, rows, layout.len());
}

/// Remove every board entity.
pub fn despawn_board(mut commands: Commands, query: Query<Entity, With<BoardPiece>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
