//! Title screen with the difficulty selector.

use bevy::prelude::*;

use super::plugin::{spawn_menu_button, MenuButton};
use crate::assets::GameAssets;
use crate::core::{Difficulty, GameState};

/// Marker for main menu UI entities.
#[derive(Component)]
pub struct MainMenuUi;

/// Text showing the selected difficulty.
#[derive(Component)]
pub struct DifficultyLabel;

const TITLE_COLOR: Color = Color::WHITE;
const LEVEL_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);

/// Set up the main menu.
pub fn setup_main_menu(mut commands: Commands, assets: Res<GameAssets>, difficulty: Res<Difficulty>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.08, 0.05)),
            MainMenuUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("WHACK-A-ZOMBIE"),
                assets.text_font(96.0),
                TextColor(TITLE_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(80.0)),
                    ..default()
                },
            ));

            spawn_menu_button(parent, &assets, "Play", Vec2::new(228.0, 63.0), MenuButton::Play);

            // Difficulty selector
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    margin: UiRect::vertical(Val::Px(30.0)),
                    ..default()
                })
                .with_children(|row| {
                    spawn_menu_button(row, &assets, "<", Vec2::new(55.0, 55.0), MenuButton::Easier);
                    row.spawn((
                        Text::new(difficulty.label()),
                        assets.text_font(36.0),
                        TextColor(LEVEL_COLOR),
                        Node {
                            width: Val::Px(220.0),
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                        TextLayout::new_with_justify(JustifyText::Center),
                        DifficultyLabel,
                    ));
                    spawn_menu_button(row, &assets, ">", Vec2::new(55.0, 55.0), MenuButton::Harder);
                });

            spawn_menu_button(parent, &assets, "Quit", Vec2::new(228.0, 63.0), MenuButton::Quit);
        });
}

/// Arrow keys step the difficulty, Enter starts the round.
pub fn main_menu_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut difficulty: ResMut<Difficulty>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::ArrowLeft) {
        *difficulty = difficulty.easier();
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        *difficulty = difficulty.harder();
    }
    if keys.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
    }
}

/// Keep the label in step with the selected difficulty.
pub fn update_difficulty_label(
    difficulty: Res<Difficulty>,
    mut label_query: Query<&mut Text, With<DifficultyLabel>>,
) {
    if !difficulty.is_changed() {
        return;
    }
    for mut text in label_query.iter_mut() {
        if text.0 != difficulty.label() {
            info!("Difficulty set to {}", difficulty.label());
            text.0 = difficulty.label().to_string();
        }
    }
}

/// Clean up main menu entities.
pub fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
