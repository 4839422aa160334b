//! In-game HUD - time, score and misses.

use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::core::{FrameSet, GameState};
use crate::round::Scoreboard;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Which scoreboard value a HUD line shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    Time,
    Score,
    Misses,
}

const HUD_TEXT_COLOR: Color = Color::WHITE;
const LOW_TIME_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Setup HUD systems.
///
/// The HUD stays up behind the replay panel and is removed when returning
/// to the menu.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnExit(GameState::MainMenu), spawn_hud)
        .add_systems(OnEnter(GameState::MainMenu), cleanup_hud)
        .add_systems(
            Update,
            update_hud
                .in_set(FrameSet::Present)
                .run_if(resource_changed::<Scoreboard>),
        );
}

/// Line shown for a field.
pub fn hud_line(field: HudField, scoreboard: &Scoreboard) -> String {
    match field {
        HudField::Time => format!("Time: {}", scoreboard.time_remaining()),
        HudField::Score => format!("Score: {}", scoreboard.score()),
        HudField::Misses => format!("Misses: {}", scoreboard.misses()),
    }
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, assets: Res<GameAssets>, scoreboard: Res<Scoreboard>) {
    // Top-left corner
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            for field in [HudField::Time, HudField::Score, HudField::Misses] {
                parent.spawn((
                    Text::new(hud_line(field, &scoreboard)),
                    assets.text_font(32.0),
                    TextColor(HUD_TEXT_COLOR),
                    field,
                ));
            }
        });
}

/// Refresh every HUD line from the scoreboard.
fn update_hud(scoreboard: Res<Scoreboard>, mut query: Query<(&mut Text, &mut TextColor, &HudField)>) {
    for (mut text, mut color, &field) in query.iter_mut() {
        text.0 = hud_line(field, &scoreboard);
        color.0 = if field == HudField::Time && scoreboard.is_time_low() {
            LOW_TIME_COLOR
        } else {
            HUD_TEXT_COLOR
        };
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_read_from_the_scoreboard() {
        let mut scoreboard = Scoreboard::new(20);
        scoreboard.increase_score(1);
        scoreboard.increase_misses();
        scoreboard.increase_misses();

        assert_eq!(hud_line(HudField::Time, &scoreboard), "Time: 20");
        assert_eq!(hud_line(HudField::Score, &scoreboard), "Score: 1");
        assert_eq!(hud_line(HudField::Misses, &scoreboard), "Misses: 2");
    }
}
