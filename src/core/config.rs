//! Game configuration loaded from an external RON file.
//!
//! Every tunable that used to be a module-level constant lives here and is
//! handed to constructors explicitly.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::board::HoleLayout;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Where the running config came from.
///
/// Loading happens before the logger is installed, so the outcome is kept
/// and reported once the app runs.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was missing and defaults were used.
    Defaults(PathBuf),
}

/// Spawn cadence and concurrency.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Shortest delay between spawn attempts (seconds)
    pub interval_min: f32,
    /// Longest delay between spawn attempts (seconds)
    pub interval_max: f32,
    /// Maximum number of live targets
    pub max_concurrent: usize,
    /// Fixed RNG seed for reproducible rounds
    pub seed: Option<u64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval_min: 0.6,
            interval_max: 1.1,
            max_concurrent: 5,
            seed: None,
        }
    }
}

/// Per-target timing and pop-out motion.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZombieConfig {
    /// Sprite size in pixels (square)
    pub size: f32,
    /// Seconds a target may idle before it sinks back on its own
    pub max_idle: f32,
    /// Length of the fade/rise and fade/sink easing
    pub fade_duration: f32,
    /// Scale overshoot at the middle of the spawn motion (0.15 = +15%)
    pub pop_strength: f32,
    /// Rise height as a fraction of the sprite size
    pub rise_ratio: f32,
    /// Pixels the target overshoots upward while settling
    pub settle_overshoot: f32,
    /// Pixels of bounce while sinking
    pub sink_overshoot: f32,
    /// Scale lost by the end of the despawn motion (0.10 = -10%)
    pub despawn_shrink: f32,
    /// How many leading frames make up the spawn clip
    pub spawn_frames: usize,
    pub spawn_frame_time: f32,
    pub idle_frame_time: f32,
    pub hit_frame_time: f32,
    pub despawn_frame_time: f32,
}

impl Default for ZombieConfig {
    fn default() -> Self {
        Self {
            size: 96.0,
            max_idle: 1.75,
            fade_duration: 0.35,
            pop_strength: 0.15,
            rise_ratio: 0.35,
            settle_overshoot: 6.0,
            sink_overshoot: 3.0,
            despawn_shrink: 0.10,
            spawn_frames: 3,
            spawn_frame_time: 0.16,
            idle_frame_time: 0.20,
            hit_frame_time: 0.12,
            despawn_frame_time: 0.18,
        }
    }
}

/// Mixer levels (linear amplitude).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub music_volume: f64,
    pub hit_volume: f64,
    pub miss_volume: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            hit_volume: 0.3,
            miss_volume: 0.3,
        }
    }
}

/// Game configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub tile_size: f32,
    pub hole_size: f32,
    /// Round length in whole seconds
    pub round_seconds: u32,
    pub score_per_hit: u32,
    /// Whether a target sinking back unhit counts as a miss
    pub expiry_counts_as_miss: bool,
    /// Hole count for Easy, Medium and Hard
    pub difficulty_holes: [usize; 3],
    /// Seed for the grass scatter on the background
    pub background_seed: u64,
    pub spawn: SpawnConfig,
    pub zombie: ZombieConfig,
    pub audio: AudioConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1024.0,
            screen_height: 768.0,
            tile_size: 64.0,
            hole_size: 128.0,
            round_seconds: 20,
            score_per_hit: 1,
            expiry_counts_as_miss: true,
            difficulty_holes: [6, 9, 12],
            background_seed: 1337,
            spawn: SpawnConfig::default(),
            zombie: ZombieConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate the config from the default path.
    ///
    /// A missing file falls back to defaults; a malformed or invalid one is
    /// an error.
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    pub fn load_from(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::from_ron(&contents).map_err(|e| match e {
                    ConfigError::ParseError { details, .. } => ConfigError::ParseError {
                        path: path.display().to_string(),
                        details,
                    },
                    other => other,
                })?;
                Ok((config, ConfigSource::File(path.to_path_buf())))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let config = Self::default();
                config.validate()?;
                Ok((config, ConfigSource::Defaults(path.to_path_buf())))
            }
            Err(e) => Err(ConfigError::ReadError {
                path: path.display().to_string(),
                details: e.to_string(),
            }),
        }
    }

    /// Parse and validate a config from RON text.
    pub fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the game loop relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("tile_size", self.tile_size),
            ("hole_size", self.hole_size),
            ("zombie.size", self.zombie.size),
            ("zombie.max_idle", self.zombie.max_idle),
            ("zombie.fade_duration", self.zombie.fade_duration),
            ("zombie.spawn_frame_time", self.zombie.spawn_frame_time),
            ("zombie.idle_frame_time", self.zombie.idle_frame_time),
            ("zombie.hit_frame_time", self.zombie.hit_frame_time),
            ("zombie.despawn_frame_time", self.zombie.despawn_frame_time),
        ];
        for (field, value) in positives {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.zombie.spawn_frames == 0 {
            return Err(ConfigError::NonPositive {
                field: "zombie.spawn_frames",
                value: 0.0,
            });
        }

        if self.round_seconds == 0 {
            return Err(ConfigError::ZeroRoundLength);
        }

        let SpawnConfig {
            interval_min,
            interval_max,
            max_concurrent,
            ..
        } = self.spawn;
        if !(interval_min > 0.0 && interval_min <= interval_max) {
            return Err(ConfigError::InvalidSpawnInterval {
                min: interval_min,
                max: interval_max,
            });
        }
        if max_concurrent == 0 {
            return Err(ConfigError::ZeroConcurrencyCap);
        }

        for holes in self.difficulty_holes {
            HoleLayout::generate(holes, self)?;
        }

        Ok(())
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Number of holes on the board for a difficulty.
    pub fn holes_for(&self, difficulty: Difficulty) -> usize {
        self.difficulty_holes[difficulty.index()]
    }
}

/// Difficulty picked in the main menu.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// One step harder, stopping at Hard.
    pub fn harder(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    /// One step easier, stopping at Easy.
    pub fn easier(self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Medium,
            _ => Difficulty::Easy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_ron_fills_in_defaults() {
        let config = GameConfig::from_ron("(round_seconds: 45, spawn: (max_concurrent: 3))").unwrap();
        assert_eq!(config.round_seconds, 45);
        assert_eq!(config.spawn.max_concurrent, 3);
        assert_eq!(config.spawn.interval_min, 0.6);
        assert_eq!(config.hole_size, 128.0);
    }

    #[test]
    fn unsupported_hole_count_is_rejected() {
        let err = GameConfig::from_ron("(difficulty_holes: (6, 7, 12))").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedHoleCount(7)));
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let err = GameConfig::from_ron("(spawn: (interval_min: 2.0, interval_max: 1.0))").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpawnInterval { .. }));
    }

    #[test]
    fn zero_cap_is_rejected() {
        let err = GameConfig::from_ron("(spawn: (max_concurrent: 0))").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroConcurrencyCap));
    }

    #[test]
    fn grid_larger_than_screen_is_rejected() {
        let err = GameConfig::from_ron("(screen_width: 300.0)").unwrap_err();
        assert!(matches!(err, ConfigError::GridDoesNotFit { .. }));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = GameConfig::from_ron("(round_seconds: )").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = Path::new("does/not/exist.ron");
        let (config, source) = GameConfig::load_from(path).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(source, ConfigSource::Defaults(path.to_path_buf()));
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let (config, source) = GameConfig::load().unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(source, ConfigSource::File(PathBuf::from(CONFIG_PATH)));
    }

    #[test]
    fn difficulty_steps_are_clamped() {
        assert_eq!(Difficulty::Easy.easier(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.harder(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.harder(), Difficulty::Hard);
        assert_eq!(GameConfig::default().holes_for(Difficulty::Hard), 12);
    }
}
