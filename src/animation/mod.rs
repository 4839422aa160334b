//! Frame-sequence animation: immutable clips and a per-entity player.
//!
//! Frames default to image handles but the player is generic so the timing
//! logic can be exercised without any assets.

mod animator;
mod clip;

pub use animator::Animator;
pub use clip::{AnimationClip, AnimationError};
