//! Startup asset resolution.

use bevy::prelude::*;
use std::path::Path;

use crate::core::AssetError;

/// Root folder the asset server reads from.
pub const ASSET_ROOT: &str = "assets";

/// Number of frames in the zombie sprite sequence.
const ZOMBIE_FRAME_COUNT: usize = 6;

/// Plugin that resolves all images and fonts at startup.
pub struct GameAssetsPlugin;

impl Plugin for GameAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_game_assets);
    }
}

/// Handles for everything drawn on screen.
///
/// `None` means the file was missing and a placeholder is drawn instead.
#[derive(Resource, Clone, Debug)]
pub struct GameAssets {
    /// Zombie animation frames, in sheet order
    pub zombie_frames: Vec<Handle<Image>>,
    /// True when the frames are stand-ins for missing art
    pub zombie_placeholder: bool,
    /// Background tiles 1 through 9
    pub tiles: Vec<Option<Handle<Image>>>,
    pub grass: [Option<Handle<Image>>; 2],
    pub hole: Option<Handle<Image>>,
    pub hammer_up: Option<Handle<Image>>,
    pub hammer_down: Option<Handle<Image>>,
    pub font: Option<Handle<Font>>,
}

impl GameAssets {
    /// Asset set made only of placeholders.
    pub fn placeholder() -> Self {
        Self {
            zombie_frames: vec![Handle::default(); ZOMBIE_FRAME_COUNT],
            zombie_placeholder: true,
            tiles: vec![None; 9],
            grass: [None, None],
            hole: None,
            hammer_up: None,
            hammer_down: None,
            font: None,
        }
    }

    /// Background tile by its map number (1..=9).
    pub fn tile(&self, number: u8) -> Option<&Handle<Image>> {
        let index = usize::from(number).checked_sub(1)?;
        self.tiles.get(index)?.as_ref()
    }

    /// Text style using the bundled font when present, Bevy's default otherwise.
    pub fn text_font(&self, font_size: f32) -> TextFont {
        TextFont {
            font: self.font.clone().unwrap_or_default(),
            font_size,
            ..default()
        }
    }
}

/// Whether `relative` exists under the asset root.
pub fn asset_exists(relative: &str) -> bool {
    Path::new(ASSET_ROOT).join(relative).is_file()
}

/// Queue a file for loading after checking it exists.
pub fn load_file<A: Asset>(asset_server: &AssetServer, relative: &str) -> Result<Handle<A>, AssetError> {
    if !asset_exists(relative) {
        return Err(AssetError::FileNotFound(relative.to_string()));
    }
    Ok(asset_server.load(relative.to_string()))
}

/// Load an ordered frame sequence; fails if any frame is missing.
pub fn load_frame_sequence(
    asset_server: &AssetServer,
    sequence: &str,
    paths: &[String],
) -> Result<Vec<Handle<Image>>, AssetError> {
    let missing = paths.iter().filter(|path| !asset_exists(path)).count();
    if missing > 0 {
        return Err(AssetError::MissingFrames {
            sequence: sequence.to_string(),
            missing,
            expected: paths.len(),
        });
    }

    Ok(paths.iter().map(|path| asset_server.load(path.clone())).collect())
}

fn zombie_frame_paths() -> Vec<String> {
    (0..ZOMBIE_FRAME_COUNT)
        .map(|i| format!("images/zombies/Zombies{i:03}.png"))
        .collect()
}

/// Log a recoverable asset error and swap in a placeholder.
fn or_placeholder<T>(result: Result<T, AssetError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{}. Using a placeholder.", e);
            None
        }
    }
}

/// Resolve every image and font used by the game.
pub fn load_game_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut assets = GameAssets::placeholder();

    if let Some(frames) = or_placeholder(load_frame_sequence(
        &asset_server,
        "zombies",
        &zombie_frame_paths(),
    )) {
        assets.zombie_frames = frames;
        assets.zombie_placeholder = false;
    }

    assets.tiles = (1..=9)
        .map(|i| or_placeholder(load_file(&asset_server, &format!("images/background/tile{i}.png"))))
        .collect();
    assets.grass = [
        or_placeholder(load_file(&asset_server, "images/background/grass1.png")),
        or_placeholder(load_file(&asset_server, "images/background/grass2.png")),
    ];
    assets.hole = or_placeholder(load_file(&asset_server, "images/background/hole.png"));
    assets.hammer_up = or_placeholder(load_file(&asset_server, "images/cursor/hammer0.png"));
    assets.hammer_down = or_placeholder(load_file(&asset_server, "images/cursor/hammer1.png"));
    assets.font = or_placeholder(load_file(&asset_server, "fonts/Pixellari.ttf"));

    let loaded = assets.tiles.iter().flatten().count() + usize::from(!assets.zombie_placeholder);
    info!("Resolved game assets ({} of 10 image groups found)", loaded);

    commands.insert_resource(assets);
}
