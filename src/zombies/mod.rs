//! Zombies module - target lifecycle, spawning and hit testing.

mod clips;
mod manager;
mod plugin;
mod render;
mod spawning;
mod zombie;

pub use clips::ZombieClips;
pub use manager::{UpdateReport, ZombieManager};
pub use plugin::ZombiePlugin;
pub use render::ZombieSprite;
pub use spawning::SpawnScheduler;
pub use zombie::{PopMotion, Transition, Zombie, ZombieId, ZombieState};
