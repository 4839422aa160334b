//! UI plugin - menus, HUD, and interface elements.

use bevy::prelude::*;

use super::{cursor, hud, menu, replay};
use crate::assets::GameAssets;
use crate::core::{Difficulty, GameState};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
        cursor::setup_cursor_systems(app);

        app
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), menu::setup_main_menu)
            .add_systems(
                Update,
                (menu::main_menu_keys, menu::update_difficulty_label)
                    .chain()
                    .run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnExit(GameState::MainMenu), menu::cleanup_main_menu)

            // Replay panel
            .add_systems(OnEnter(GameState::GameOver), replay::setup_replay_panel)
            .add_systems(Update, replay::replay_keys.run_if(in_state(GameState::GameOver)))
            .add_systems(OnExit(GameState::GameOver), replay::cleanup_replay_panel)

            // Buttons behave the same on every screen
            .add_systems(Update, menu_button_input);
    }
}

/// What a button does when pressed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Play,
    Easier,
    Harder,
    Quit,
    Replay,
    Menu,
}

pub(super) const BUTTON_COLOR: Color = Color::srgb(0.15, 0.15, 0.2);
pub(super) const BUTTON_HOVER_COLOR: Color = Color::srgb(0.25, 0.25, 0.3);
pub(super) const BUTTON_PRESSED_COLOR: Color = Color::srgb(0.3, 0.3, 0.35);
pub(super) const BUTTON_TEXT_COLOR: Color = Color::srgb(0.8, 0.8, 0.85);

/// Helper to spawn a menu button.
pub(super) fn spawn_menu_button(
    parent: &mut ChildBuilder,
    assets: &GameAssets,
    text: &str,
    size: Vec2,
    button: MenuButton,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(size.x),
                height: Val::Px(size.y),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
            BorderRadius::all(Val::Px(5.0)),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                assets.text_font(24.0),
                TextColor(BUTTON_TEXT_COLOR),
            ));
        });
}

/// Handle button interactions on every screen.
fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut difficulty: ResMut<Difficulty>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED_COLOR.into();
                match button {
                    MenuButton::Play | MenuButton::Replay => {
                        next_state.set(GameState::Playing);
                    }
                    MenuButton::Menu => {
                        next_state.set(GameState::MainMenu);
                    }
                    MenuButton::Easier => {
                        *difficulty = difficulty.easier();
                    }
                    MenuButton::Harder => {
                        *difficulty = difficulty.harder();
                    }
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => {
                *bg_color = BUTTON_HOVER_COLOR.into();
            }
            Interaction::None => {
                *bg_color = BUTTON_COLOR.into();
            }
        }
    }
}
