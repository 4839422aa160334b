//! Audio module - whack sound effects and background music via kira.

mod plugin;
mod sounds;

pub use plugin::{play_sound, MusicChannel, SoundPlugin};
pub use sounds::{SoundBank, SoundEffect, MUSIC_PATH};
