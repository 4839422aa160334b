//! Round module - scoreboard and round flow.

mod plugin;
mod scoreboard;

pub use plugin::{reset_round, RoundPlugin};
pub use scoreboard::{Scoreboard, LOW_TIME_SECONDS};
