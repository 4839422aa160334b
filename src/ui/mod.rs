//! UI module - main menu, HUD, replay panel and the hammer cursor.

mod cursor;
mod hud;
mod menu;
mod plugin;
mod replay;

pub use cursor::HammerCursor;
pub use hud::{hud_line, HudField, HudRoot};
pub use menu::{DifficultyLabel, MainMenuUi};
pub use plugin::{MenuButton, UiPlugin};
pub use replay::{summary_lines, ReplayUi};
