//! Sprites mirroring the live targets.
//!
//! The manager is the only owner of target state; each target gets one
//! sprite entity tagged with its id, which is updated every frame and
//! despawned once the id is gone.

use std::collections::HashMap;

use bevy::prelude::*;

use super::manager::ZombieManager;
use super::zombie::{Zombie, ZombieId, ZombieState};
use crate::assets::GameAssets;
use crate::core::{world_position, GameConfig};

/// Targets are drawn above the board; later spawns on top of earlier ones.
const ZOMBIE_Z: f32 = 10.0;
const SPAWN_ORDER_STEP: f32 = 0.01;

/// Sprite entity for the target with this id.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZombieSprite(pub ZombieId);

fn placeholder_color(state: ZombieState) -> Color {
    match state {
        ZombieState::Hit => Color::srgb(0.85, 0.25, 0.2),
        _ => Color::srgb(0.4, 0.65, 0.3),
    }
}

fn apply_look(
    zombie: &Zombie,
    order: usize,
    config: &GameConfig,
    placeholder: bool,
    sprite: &mut Sprite,
    transform: &mut Transform,
) {
    let motion = zombie.motion(&config.zombie);
    let base = if placeholder {
        placeholder_color(zombie.state())
    } else {
        Color::WHITE
    };

    if let Some(frame) = zombie.current_frame() {
        sprite.image = frame.clone();
    }
    sprite.color = base.with_alpha(f32::from(motion.alpha) / 255.0);
    sprite.custom_size = Some(Vec2::splat(zombie.size()));

    let center = zombie.position() + Vec2::new(0.0, motion.y_offset);
    let z = ZOMBIE_Z + order as f32 * SPAWN_ORDER_STEP;
    transform.translation = world_position(center, config.screen_size(), z);
    transform.scale = Vec3::splat(motion.scale);
}

/// Create, update and remove target sprites to match the manager.
pub fn sync_zombie_sprites(
    mut commands: Commands,
    manager: Res<ZombieManager>,
    config: Res<GameConfig>,
    assets: Res<GameAssets>,
    mut sprites: Query<(Entity, &ZombieSprite, &mut Sprite, &mut Transform)>,
) {
    let order: HashMap<ZombieId, usize> = manager
        .alive()
        .enumerate()
        .map(|(i, z)| (z.id(), i))
        .collect();
    let mut drawn = Vec::with_capacity(order.len());

    for (entity, tag, mut sprite, mut transform) in sprites.iter_mut() {
        let (Some(zombie), Some(&i)) = (manager.get(tag.0), order.get(&tag.0)) else {
            commands.entity(entity).despawn_recursive();
            continue;
        };
        apply_look(zombie, i, &config, assets.zombie_placeholder, &mut sprite, &mut transform);
        drawn.push(tag.0);
    }

    for (i, zombie) in manager.alive().enumerate() {
        if drawn.contains(&zombie.id()) {
            continue;
        }
        let mut sprite = Sprite::default();
        let mut transform = Transform::default();
        apply_look(zombie, i, &config, assets.zombie_placeholder, &mut sprite, &mut transform);
        commands.spawn((sprite, transform, ZombieSprite(zombie.id())));
    }
}

/// Remove every target sprite.
pub fn despawn_zombie_sprites(mut commands: Commands, query: Query<Entity, With<ZombieSprite>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
