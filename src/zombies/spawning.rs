//! Randomized spawn cadence.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::manager::ZombieManager;
use super::zombie::ZombieId;
use crate::board::HoleLayout;
use crate::core::SpawnConfig;

/// Counts down to the next spawn attempt and picks a free hole for it.
#[derive(Resource, Debug)]
pub struct SpawnScheduler {
    countdown: f32,
    interval_min: f32,
    interval_max: f32,
    zombie_size: f32,
    rng: StdRng,
}

impl SpawnScheduler {
    /// Seeded from `spawn.seed` when set, from entropy otherwise.
    pub fn new(spawn: &SpawnConfig, zombie_size: f32) -> Self {
        let rng = match spawn.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut scheduler = Self {
            countdown: 0.0,
            interval_min: spawn.interval_min,
            interval_max: spawn.interval_max,
            zombie_size,
            rng,
        };
        scheduler.reset();
        scheduler
    }

    /// Start a fresh countdown.
    pub fn reset(&mut self) {
        self.countdown = self.next_interval();
    }

    pub fn countdown(&self) -> f32 {
        self.countdown
    }

    fn next_interval(&mut self) -> f32 {
        self.rng.gen_range(self.interval_min..=self.interval_max)
    }

    /// Count down by `dt` and spawn into a random free hole when due.
    ///
    /// While the manager is full the countdown keeps running, so a spawn
    /// happens as soon as room frees up.
    pub fn tick(&mut self, dt: f32, manager: &mut ZombieManager, layout: &HoleLayout) -> Option<ZombieId> {
        self.countdown -= dt;
        if self.countdown > 0.0 || manager.is_full() {
            return None;
        }

        let spawned = self.spawn_into_free_slot(manager, layout);
        self.countdown = self.next_interval();
        spawned
    }

    fn spawn_into_free_slot(&mut self, manager: &mut ZombieManager, layout: &HoleLayout) -> Option<ZombieId> {
        let free = manager.free_slots(layout);
        let slot = *free.choose(&mut self.rng)?;
        let center = layout.center(slot)?;
        manager.spawn_in_slot(slot, center, self.zombie_size)
    }
}
