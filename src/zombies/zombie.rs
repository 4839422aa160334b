//! A single target and its lifecycle state machine.

use std::sync::Arc;

use bevy::prelude::*;

use super::clips::ZombieClips;
use crate::animation::Animator;
use crate::core::{bump, progress, smoothstep, ZombieConfig};

/// Stable handle for a target, unique within one manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZombieId(pub u64);

/// Lifecycle state.
///
/// `Spawning → Idle → (Hit | Despawning) → Dead`. Only `Idle` targets can be
/// clicked, and `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZombieState {
    /// Rising out of the hole, not yet clickable.
    Spawning,
    /// Fully out and waiting to be whacked.
    Idle,
    /// Playing the hit reaction.
    Hit,
    /// Sinking back into the hole unhit.
    Despawning,
    /// Finished; removed by the manager on its next update.
    Dead,
}

/// State change made by one `Zombie::update` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Spawn clip finished, the target is now clickable.
    Emerged,
    /// Idled past `max_idle` and started sinking back.
    Expired,
    /// Hit or despawn clip finished.
    Died,
}

/// Procedural pop-out offsets applied on top of the animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopMotion {
    /// Opacity, 0 (invisible) to 255 (opaque)
    pub alpha: u8,
    /// Uniform scale around the sprite center
    pub scale: f32,
    /// Downward offset in screen pixels (negative moves up)
    pub y_offset: f32,
}

impl PopMotion {
    pub const REST: Self = Self {
        alpha: 255,
        scale: 1.0,
        y_offset: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct Zombie {
    id: ZombieId,
    position: Vec2,
    size: f32,
    slot: Option<usize>,
    state: ZombieState,
    state_time: f32,
    clickable: bool,
    max_idle: f32,
    animator: Animator,
    clips: Arc<ZombieClips>,
}

impl Zombie {
    /// Create a target centered on `position` that immediately starts rising.
    pub fn spawn(
        id: ZombieId,
        position: Vec2,
        size: f32,
        slot: Option<usize>,
        max_idle: f32,
        clips: Arc<ZombieClips>,
    ) -> Self {
        let mut zombie = Self {
            id,
            position,
            size,
            slot,
            state: ZombieState::Dead,
            state_time: 0.0,
            clickable: false,
            max_idle,
            animator: Animator::new(),
            clips,
        };
        zombie.enter(ZombieState::Spawning);
        zombie
    }

    /// Entry actions shared by every state.
    fn enter(&mut self, state: ZombieState) {
        self.state = state;
        self.state_time = 0.0;
        self.clickable = state == ZombieState::Idle;

        let clips = Arc::clone(&self.clips);
        let clip = match state {
            ZombieState::Spawning => &clips.spawn,
            ZombieState::Idle => &clips.idle,
            ZombieState::Hit => &clips.hit,
            ZombieState::Despawning => &clips.despawn,
            ZombieState::Dead => return,
        };
        self.animator.play(clip, true);
    }

    /// Advance by `dt` seconds and apply at most one state change.
    pub fn update(&mut self, dt: f32) -> Option<Transition> {
        if self.state == ZombieState::Dead {
            return None;
        }

        self.state_time += dt;
        self.animator.update(dt);

        match self.state {
            ZombieState::Spawning if self.animator.is_finished() => {
                self.enter(ZombieState::Idle);
                Some(Transition::Emerged)
            }
            ZombieState::Idle if self.state_time >= self.max_idle => {
                self.enter(ZombieState::Despawning);
                Some(Transition::Expired)
            }
            ZombieState::Hit | ZombieState::Despawning if self.animator.is_finished() => {
                self.enter(ZombieState::Dead);
                Some(Transition::Died)
            }
            _ => None,
        }
    }

    /// Whack the target. Returns false (and changes nothing) unless it is idle.
    pub fn hit(&mut self) -> bool {
        if self.state != ZombieState::Idle {
            return false;
        }
        self.enter(ZombieState::Hit);
        true
    }

    /// Send the target back into its hole. Only idle targets react.
    pub fn despawn(&mut self) -> bool {
        if self.state != ZombieState::Idle {
            return false;
        }
        self.enter(ZombieState::Despawning);
        true
    }

    /// Put the target back into a fresh idle state.
    pub fn reset(&mut self) {
        self.enter(ZombieState::Idle);
    }

    pub fn id(&self) -> ZombieId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Hole this target was spawned into, if it was spawned into one.
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    pub fn state(&self) -> ZombieState {
        self.state
    }

    /// Seconds spent in the current state.
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn is_alive(&self) -> bool {
        self.state != ZombieState::Dead
    }

    pub fn max_idle(&self) -> f32 {
        self.max_idle
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn current_frame(&self) -> Option<&Handle<Image>> {
        self.animator.current_frame()
    }

    /// Square hit box centered on the position.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, Vec2::splat(self.size))
    }

    /// Half-open: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, point: Vec2) -> bool {
        let bounds = self.bounds();
        point.x >= bounds.min.x
            && point.x < bounds.max.x
            && point.y >= bounds.min.y
            && point.y < bounds.max.y
    }

    /// Fade, rise and pop for the current moment of the lifecycle.
    pub fn motion(&self, tuning: &ZombieConfig) -> PopMotion {
        let s = smoothstep(progress(self.state_time, tuning.fade_duration));
        let rise = (self.size * tuning.rise_ratio).trunc();

        match self.state {
            ZombieState::Spawning => PopMotion {
                alpha: (255.0 * s) as u8,
                scale: 1.0 + tuning.pop_strength * bump(s),
                y_offset: (1.0 - s) * rise - tuning.settle_overshoot * bump(s),
            },
            ZombieState::Despawning => PopMotion {
                alpha: (255.0 * (1.0 - s)) as u8,
                scale: 1.0 - tuning.despawn_shrink * s,
                y_offset: s * rise - tuning.sink_overshoot * s * (1.0 - s),
            },
            _ => PopMotion::REST,
        }
    }
}
