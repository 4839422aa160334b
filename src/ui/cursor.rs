//! Hammer cursor drawn over everything else.

use bevy::prelude::*;
use bevy::ui::FocusPolicy;
use bevy::window::PrimaryWindow;

use crate::assets::GameAssets;
use crate::core::{FrameSet, GameState};

/// Marker for the hammer cursor node.
#[derive(Component)]
pub struct HammerCursor;

const CURSOR_SIZE: f32 = 64.0;
const CURSOR_UP_COLOR: Color = Color::srgb(0.55, 0.4, 0.25);
const CURSOR_DOWN_COLOR: Color = Color::srgb(0.8, 0.6, 0.35);

pub fn setup_cursor_systems(app: &mut App) {
    app.add_systems(OnExit(GameState::Loading), spawn_cursor)
        .add_systems(Update, follow_pointer.in_set(FrameSet::Present));
}

/// Replace the OS cursor with the hammer.
fn spawn_cursor(
    mut commands: Commands,
    assets: Res<GameAssets>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.visible = false;
    }

    let node = Node {
        position_type: PositionType::Absolute,
        width: Val::Px(CURSOR_SIZE),
        height: Val::Px(CURSOR_SIZE),
        ..default()
    };
    let mut cursor = commands.spawn((
        node,
        GlobalZIndex(i32::MAX),
        Visibility::Hidden,
        FocusPolicy::Pass,
        HammerCursor,
    ));
    match &assets.hammer_up {
        Some(image) => {
            cursor.insert(ImageNode::new(image.clone()));
        }
        None => {
            cursor.insert(BackgroundColor(CURSOR_UP_COLOR));
        }
    }
}

/// Center the hammer on the pointer and swing it while the button is held.
fn follow_pointer(
    mouse: Res<ButtonInput<MouseButton>>,
    assets: Res<GameAssets>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut cursor_query: Query<
        (
            &mut Node,
            &mut Visibility,
            Option<&mut ImageNode>,
            Option<&mut BackgroundColor>,
        ),
        With<HammerCursor>,
    >,
) {
    let Ok((mut node, mut visibility, image, color)) = cursor_query.get_single_mut() else {
        return;
    };
    let Some(position) = window_query
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position())
    else {
        *visibility = Visibility::Hidden;
        return;
    };

    *visibility = Visibility::Inherited;
    node.left = Val::Px(position.x - CURSOR_SIZE / 2.0);
    node.top = Val::Px(position.y - CURSOR_SIZE / 2.0);

    let pressed = mouse.pressed(MouseButton::Left);
    if let Some(mut image) = image {
        let handle = if pressed {
            assets.hammer_down.as_ref().or(assets.hammer_up.as_ref())
        } else {
            assets.hammer_up.as_ref()
        };
        if let Some(handle) = handle {
            if image.image != *handle {
                image.image = handle.clone();
            }
        }
    }
    if let Some(mut color) = color {
        color.0 = if pressed { CURSOR_DOWN_COLOR } else { CURSOR_UP_COLOR };
    }
}
