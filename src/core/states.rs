//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Target spawning
//! only runs while `Playing`, the replay panel only exists in `GameOver`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Loading` while data files are read
/// - Move to `MainMenu` when loading completes
/// - Enter `Playing` when the player presses Play (or Replay)
/// - `GameOver` when the round timer runs out
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading assets and data files
    #[default]
    Loading,
    /// Title screen with the difficulty selector
    MainMenu,
    /// A round is running
    Playing,
    /// Round finished, replay panel is shown over the board
    GameOver,
}

/// Ordered phases of one frame.
///
/// Input is drained first, then clicks and timers are resolved against the
/// targets as they were drawn last frame, then new targets spawn and every
/// target ages, and finally everything visible is synced from the
/// simulation. The sets are chained in `CorePlugin`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Convert raw window input into game events.
    Input,
    /// Resolve clicks and tick the round timer.
    Resolve,
    /// Schedule new targets.
    Spawn,
    /// Age targets and retire the dead ones.
    Advance,
    /// Mirror simulation state onto sprites and UI.
    Present,
}
