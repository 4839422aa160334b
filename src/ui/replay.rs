//! End-of-round panel with the final stats.

use bevy::prelude::*;

use super::plugin::{spawn_menu_button, MenuButton};
use crate::assets::GameAssets;
use crate::core::GameState;
use crate::round::Scoreboard;

/// Marker for replay panel entities.
#[derive(Component)]
pub struct ReplayUi;

const PANEL_SIZE: Vec2 = Vec2::new(500.0, 300.0);
const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);
const GAME_OVER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// The three stat lines under the title.
pub fn summary_lines(scoreboard: &Scoreboard) -> [String; 3] {
    [
        format!("Final Score: {}", scoreboard.score()),
        format!("Accuracy: {:.1}%", scoreboard.accuracy()),
        format!("Hits: {} | Misses: {}", scoreboard.hits(), scoreboard.misses()),
    ]
}

/// Set up the replay panel over the board.
pub fn setup_replay_panel(mut commands: Commands, assets: Res<GameAssets>, scoreboard: Res<Scoreboard>) {
    // Dark overlay
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GlobalZIndex(10),
            ReplayUi,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        width: Val::Px(PANEL_SIZE.x),
                        height: Val::Px(PANEL_SIZE.y),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(20.0)),
                        border: UiRect::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb_u8(50, 50, 50)),
                    BorderColor(Color::srgb_u8(80, 80, 80)),
                    BorderRadius::all(Val::Px(10.0)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Game Over!"),
                        assets.text_font(56.0),
                        TextColor(GAME_OVER_COLOR),
                        Node {
                            margin: UiRect::bottom(Val::Px(20.0)),
                            ..default()
                        },
                    ));

                    for line in summary_lines(&scoreboard) {
                        panel.spawn((
                            Text::new(line),
                            assets.text_font(28.0),
                            TextColor(Color::WHITE),
                            Node {
                                margin: UiRect::bottom(Val::Px(8.0)),
                                ..default()
                            },
                        ));
                    }

                    panel
                        .spawn(Node {
                            flex_direction: FlexDirection::Row,
                            margin: UiRect::top(Val::Auto),
                            ..default()
                        })
                        .with_children(|row| {
                            spawn_menu_button(row, &assets, "Replay (R)", BUTTON_SIZE, MenuButton::Replay);
                            spawn_menu_button(row, &assets, "Menu (M)", BUTTON_SIZE, MenuButton::Menu);
                        });
                });
        });
}

/// R replays, M returns to the menu.
pub fn replay_keys(keys: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<GameState>>) {
    if keys.just_pressed(KeyCode::KeyR) {
        next_state.set(GameState::Playing);
    } else if keys.just_pressed(KeyCode::KeyM) {
        next_state.set(GameState::MainMenu);
    }
}

/// Clean up replay panel entities.
pub fn cleanup_replay_panel(mut commands: Commands, query: Query<Entity, With<ReplayUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_formats_accuracy_with_one_decimal() {
        let mut scoreboard = Scoreboard::new(20);
        scoreboard.increase_score(1);
        scoreboard.increase_misses();
        scoreboard.increase_misses();

        let [score, accuracy, stats] = summary_lines(&scoreboard);
        assert_eq!(score, "Final Score: 1");
        assert_eq!(accuracy, "Accuracy: 33.3%");
        assert_eq!(stats, "Hits: 1 | Misses: 2");
    }

    #[test]
    fn summary_without_clicks_shows_zero_accuracy() {
        let [_, accuracy, _] = summary_lines(&Scoreboard::new(20));
        assert_eq!(accuracy, "Accuracy: 0.0%");
    }
}
