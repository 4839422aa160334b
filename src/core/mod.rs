//! Core game module - states, events, configuration and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod error;
mod events;
mod plugin;
mod states;
mod tween;

pub use config::*;
pub use error::*;
pub use events::*;
pub use plugin::{world_position, CorePlugin};
pub use states::*;
pub use tween::*;
