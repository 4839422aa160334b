//! Owner of every live target.

use std::sync::Arc;

use bevy::prelude::*;

use super::clips::ZombieClips;
use super::zombie::{Transition, Zombie, ZombieId, ZombieState};
use crate::animation::AnimationError;
use crate::board::HoleLayout;
use crate::core::GameConfig;

/// What happened during one `ZombieManager::update`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateReport {
    /// Targets that became clickable
    pub emerged: usize,
    /// Positions of targets that idled out and started sinking back unhit
    pub expired: Vec<Vec2>,
    /// Targets removed because they reached `Dead`
    pub retired: usize,
}

/// Live targets in spawn order, capped at `max_concurrent`.
///
/// Spawn order matters: when hit boxes overlap, the earliest spawned target
/// takes the click.
#[derive(Resource, Debug)]
pub struct ZombieManager {
    zombies: Vec<Zombie>,
    clips: Arc<ZombieClips>,
    max_idle: f32,
    max_concurrent: usize,
    next_id: u64,
}

impl ZombieManager {
    pub fn new(clips: Arc<ZombieClips>, max_idle: f32, max_concurrent: usize) -> Self {
        Self {
            zombies: Vec::new(),
            clips,
            max_idle,
            max_concurrent,
            next_id: 0,
        }
    }

    /// Build clips from the frame sheet and take limits from the config.
    pub fn from_config(frames: &[Handle<Image>], config: &GameConfig) -> Result<Self, AnimationError> {
        let clips = ZombieClips::from_frames(frames, &config.zombie)?;
        Ok(Self::new(
            Arc::new(clips),
            config.zombie.max_idle,
            config.spawn.max_concurrent,
        ))
    }

    /// Spawn a target centered on `position`. None when the cap is reached.
    pub fn spawn(&mut self, position: Vec2, size: f32) -> Option<ZombieId> {
        self.insert(position, size, None)
    }

    /// Spawn a target bound to a hole, so occupancy does not have to guess.
    pub fn spawn_in_slot(&mut self, slot: usize, position: Vec2, size: f32) -> Option<ZombieId> {
        self.insert(position, size, Some(slot))
    }

    fn insert(&mut self, position: Vec2, size: f32, slot: Option<usize>) -> Option<ZombieId> {
        if self.is_full() {
            return None;
        }

        let id = ZombieId(self.next_id);
        self.next_id += 1;
        self.zombies.push(Zombie::spawn(
            id,
            position,
            size,
            slot,
            self.max_idle,
            Arc::clone(&self.clips),
        ));
        debug!("Spawned zombie {:?} at {:?} (slot {:?})", id, position, slot);
        Some(id)
    }

    /// Age every target in spawn order, then drop the dead ones.
    pub fn update(&mut self, dt: f32) -> UpdateReport {
        let mut report = UpdateReport::default();

        for zombie in self.zombies.iter_mut() {
            match zombie.update(dt) {
                Some(Transition::Emerged) => report.emerged += 1,
                Some(Transition::Expired) => report.expired.push(zombie.position()),
                Some(Transition::Died) | None => {}
            }
        }

        let before = self.zombies.len();
        self.zombies.retain(Zombie::is_alive);
        report.retired = before - self.zombies.len();
        report
    }

    /// Hit the earliest spawned clickable target under `point`.
    pub fn handle_click(&mut self, point: Vec2) -> bool {
        let target = self.zombies.iter_mut().find(|z| {
            z.state() == ZombieState::Idle && z.is_clickable() && z.contains(point)
        });

        match target {
            Some(zombie) => {
                debug!("Whacked zombie {:?} at {:?}", zombie.id(), point);
                zombie.hit()
            }
            None => false,
        }
    }

    pub fn alive(&self) -> impl Iterator<Item = &Zombie> {
        self.zombies.iter().filter(|z| z.is_alive())
    }

    pub fn count(&self) -> usize {
        self.alive().count()
    }

    pub fn is_full(&self) -> bool {
        self.count() >= self.max_concurrent
    }

    pub fn get(&self, id: ZombieId) -> Option<&Zombie> {
        self.zombies.iter().find(|z| z.id() == id)
    }

    /// Drop every target. Ids keep counting up.
    pub fn clear(&mut self) {
        self.zombies.clear();
    }

    /// Which holes currently hold a live target.
    ///
    /// Bound targets occupy their own slot; unbound ones occupy the hole
    /// whose center is nearest.
    pub fn occupancy(&self, layout: &HoleLayout) -> Vec<bool> {
        let mut occupied = vec![false; layout.len()];
        for zombie in self.alive() {
            let slot = zombie
                .slot()
                .or_else(|| layout.nearest_slot(zombie.position()));
            if let Some(flag) = slot.and_then(|s| occupied.get_mut(s)) {
                *flag = true;
            }
        }
        occupied
    }

    pub fn free_slots(&self, layout: &HoleLayout) -> Vec<usize> {
        self.occupancy(layout)
            .into_iter()
            .enumerate()
            .filter_map(|(slot, taken)| (!taken).then_some(slot))
            .collect()
    }
}
