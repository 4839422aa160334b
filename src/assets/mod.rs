//! Image and font handles resolved from the asset folder by naming convention.
//!
//! Every file is checked on disk before it is queued for loading. Missing
//! files are reported once at startup and replaced by placeholders, so the
//! render loop never has to deal with absent art.

mod loading;

pub use loading::{
    asset_exists, load_file, load_frame_sequence, load_game_assets, GameAssets, GameAssetsPlugin,
    ASSET_ROOT,
};

use bevy::prelude::*;

/// Sprite for `image`, or a solid-color quad of the same size when the
/// image is missing.
pub fn sprite_or_placeholder(image: Option<&Handle<Image>>, size: Vec2, fallback: Color) -> Sprite {
    match image {
        Some(handle) => Sprite {
            image: handle.clone(),
            custom_size: Some(size),
            ..default()
        },
        None => Sprite::from_color(fallback, size),
    }
}
