//! Per-state animation clips built from the zombie frame sheet.

use std::sync::Arc;

use bevy::prelude::*;

use crate::animation::{AnimationClip, AnimationError};
use crate::core::ZombieConfig;

/// The four clips a zombie switches between.
///
/// Built once per round and shared by every zombie, so clip identity can be
/// used to tell which state's animation is playing.
#[derive(Debug)]
pub struct ZombieClips {
    pub spawn: Arc<AnimationClip>,
    pub idle: Arc<AnimationClip>,
    pub hit: Arc<AnimationClip>,
    pub despawn: Arc<AnimationClip>,
}

impl ZombieClips {
    /// Derive the clips from the frame sheet:
    /// - idle loops over every frame
    /// - spawn plays the leading `spawn_frames` frames once
    /// - despawn plays the spawn frames backwards
    /// - hit plays every frame once, faster than idle
    pub fn from_frames(frames: &[Handle<Image>], config: &ZombieConfig) -> Result<Self, AnimationError> {
        let spawn_count = config.spawn_frames.min(frames.len());

        let spawn = AnimationClip::new(
            "spawn",
            frames[..spawn_count].to_vec(),
            config.spawn_frame_time,
            false,
        )?;
        let despawn = spawn.reversed("despawn", config.despawn_frame_time)?;
        let idle = AnimationClip::new("idle", frames.to_vec(), config.idle_frame_time, true)?;
        let hit = AnimationClip::new("hit", frames.to_vec(), config.hit_frame_time, false)?;

        Ok(Self {
            spawn: Arc::new(spawn),
            idle: Arc::new(idle),
            hit: Arc::new(hit),
            despawn: Arc::new(despawn),
        })
    }
}
